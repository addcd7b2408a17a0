use crate::{graph::RootedTree, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        vertices: [(i64, u8); n],
    }

    let parents = vertices
        .iter()
        .map(|&(p, _)| (p > 0).then(|| p as usize - 1))
        .collect::<Vec<_>>();
    let disrespects = vertices.iter().map(|&(_, c)| c == 1).collect::<Vec<_>>();

    let deleted = deletion_order(&parents, &disrespects);

    if deleted.is_empty() {
        judge.answer(-1);
    } else {
        judge.answer_iter(deleted.iter().map(|v| v + 1));
    }
}

/// 削除される頂点を番号順に並べたもの
///
/// 削除で子が付け替わっても条件は変わらないので、初期状態で判定できる
fn deletion_order(parents: &[Option<usize>], disrespects: &[bool]) -> Vec<usize> {
    let tree = RootedTree::from_parents(parents);
    let children = tree.children();

    (0..tree.len())
        .filter(|&v| tree.parent[v].is_some() && disrespects[v])
        .filter(|&v| children[v].iter().all(|&c| disrespects[c]))
        .collect()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("1 2 4\n", run(solve, "5\n3 1\n1 1\n-1 0\n2 1\n3 0\n"));
        assert_eq!("-1\n", run(solve, "5\n-1 0\n1 1\n1 1\n2 0\n3 0\n"));
        assert_eq!(
            "5\n",
            run(solve, "8\n2 1\n-1 0\n1 0\n1 1\n1 1\n4 0\n5 1\n7 0\n")
        );
    }
}
