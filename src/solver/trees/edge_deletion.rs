use crate::{graph::WeightedGraph, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        k: usize,
        edges: [(Usize1, Usize1, i64); m],
    }

    let kept = kept_edges(n, &edges, k);
    judge.answer(kept.len());

    if !kept.is_empty() {
        judge.answer_iter(kept.iter().map(|id| id + 1));
    }
}

/// 最短路木のうち、頂点1から近い順に確定した頂点の親辺を最大k本残す
fn kept_edges(n: usize, edges: &[(usize, usize, i64)], k: usize) -> Vec<usize> {
    let mut graph = WeightedGraph::new(n);

    for &(u, v, w) in edges {
        graph.add_edge(u, v, w);
    }

    let paths = graph.dijkstra(0);

    paths
        .order
        .iter()
        .filter_map(|&v| paths.parent_edge[v])
        .take(k.min(n - 1))
        .collect()
}
