use crate::{graph::RootedTree, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        operations: [u8; n],
        parents: [Usize1; n - 1],
    }

    let parents = std::iter::once(None)
        .chain(parents.into_iter().map(Some))
        .collect::<Vec<_>>();
    let tree = RootedTree::from_parents(&parents);
    let children = tree.children();

    // rank[v]: 部分木の葉に 1..=葉数 を割り当てたとき、v に届く値が上から何番目か
    let mut rank = vec![0usize; n];

    for &v in tree.order.iter().rev() {
        let c = &children[v];

        rank[v] = if c.is_empty() {
            1
        } else if operations[v] == 1 {
            c.iter().map(|&u| rank[u]).min().unwrap_or(1)
        } else {
            c.iter().map(|&u| rank[u]).sum()
        };
    }

    let leaves = children.iter().filter(|c| c.is_empty()).count();
    judge.answer(leaves - rank[tree.root] + 1);
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("1\n", run(solve, "6\n1 0 1 1 0 1\n1 2 2 2 2\n"));
        assert_eq!("4\n", run(solve, "5\n1 0 1 0 1\n1 1 1 1\n"));
        assert_eq!("4\n", run(solve, "8\n1 0 0 1 0 1 1 0\n1 1 2 2 3 3 3\n"));
        assert_eq!("5\n", run(solve, "9\n1 1 0 0 1 0 1 0 1\n1 1 2 2 3 3 4 4\n"));
    }
}
