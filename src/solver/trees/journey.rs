use crate::{
    graph::{Graph, RootedTree},
    problem::Judge,
};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        edges: [(Usize1, Usize1); n - 1],
    }

    judge.answer_float(expected_length(n, &edges), 15);
}

/// 子を一様ランダムに選んで葉まで降りるときの経路長の期待値
fn expected_length(n: usize, edges: &[(usize, usize)]) -> f64 {
    let graph = Graph::from_edges(n, edges);
    let tree = RootedTree::new(&graph, 0);
    let children = tree.children();
    let mut expected = vec![0.0; n];

    for &v in tree.order.iter().rev() {
        let c = &children[v];

        if !c.is_empty() {
            expected[v] = 1.0 + c.iter().map(|&u| expected[u]).sum::<f64>() / c.len() as f64;
        }
    }

    expected[0]
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[1.5], &run(solve, "4\n1 2\n1 3\n2 4\n"));
        assert_floats(&[2.0], &run(solve, "5\n1 2\n1 3\n3 4\n2 5\n"));
    }

    #[test]
    fn single_city() {
        assert_floats(&[0.0], &run(solve, "1\n"));
    }
}
