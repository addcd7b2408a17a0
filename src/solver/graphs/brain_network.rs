use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    judge.answer(if is_tree(n, &edges) { "yes" } else { "no" });
}

/// 辺が n - 1 本で連結なら木
fn is_tree(n: usize, edges: &[(usize, usize)]) -> bool {
    if edges.len() + 1 != n {
        return false;
    }

    let mut uf = UnionFind::new(n);

    for &(u, v) in edges {
        uf.unite(u, v);
    }

    uf.group_count() == 1
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("no\n", run(solve, "4 4\n1 2\n2 3\n3 1\n4 1\n"));
        assert_eq!("yes\n", run(solve, "6 5\n1 2\n2 3\n3 4\n4 5\n3 6\n"));
    }

    #[test]
    fn disconnected_with_cycle() {
        assert_eq!("no\n", run(solve, "4 3\n1 2\n2 3\n3 1\n"));
    }
}
