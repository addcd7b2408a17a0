use crate::{
    graph::{Graph, RootedTree},
    problem::Judge,
};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: usize,
        universities: [Usize1; 2 * k],
        edges: [(Usize1, Usize1); n - 1],
    }

    let graph = Graph::from_edges(n, &edges);
    let tree = RootedTree::new(&graph, 0);
    let mut count = vec![0usize; n];

    for &u in universities.iter() {
        count[u] += 1;
    }

    for &v in tree.order.iter().rev() {
        if let Some(p) = tree.parent[v] {
            count[p] += count[v];
        }
    }

    // 親への辺を通るペアは、部分木側と外側の少ない方の数だけ作れる
    let total = (0..n)
        .filter(|&v| v != tree.root)
        .map(|v| count[v].min(2 * k - count[v]) as u64)
        .sum::<u64>();

    judge.answer(total);
}
