use crate::{
    graph::{Graph, RootedTree},
    problem::Judge,
};
use itertools::Itertools;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: usize,
        edges: [(Usize1, Usize1); n - 1],
    }

    let graph = Graph::from_edges(n, &edges);
    let tree = RootedTree::new(&graph, 0);
    let sizes = tree.subtree_sizes();

    // v を工業都市にすると、v の幸福度 depth が加わり部分木の他の頂点が1ずつ減る
    let happiness = (0..n)
        .map(|v| tree.depth[v] as i64 - (sizes[v] as i64 - 1))
        .sorted_by(|a, b| b.cmp(a))
        .take(k)
        .sum::<i64>();

    judge.answer(happiness);
}
