use crate::{
    graph::{reroot, Graph, Rerooting},
    problem::Judge,
};
use log::trace;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        a: [i64; n],
        edges: [(Usize1, Usize1); n - 1],
    }

    let graph = Graph::from_edges(n, &edges);
    let costs = reroot(&graph, &DistanceCost { a: &a });
    trace!("costs: {:?}", costs);

    let best = costs
        .into_iter()
        .map(|(_, cost)| cost)
        .max()
        .unwrap_or(0);

    judge.answer(best);
}

/// (部分木の重み和, Σ dist(根, v) * a_v)
struct DistanceCost<'a> {
    a: &'a [i64],
}

impl Rerooting for DistanceCost<'_> {
    type Value = (i64, i64);

    fn identity(&self) -> Self::Value {
        (0, 0)
    }

    fn merge(&self, x: &Self::Value, y: &Self::Value) -> Self::Value {
        (x.0 + y.0, x.1 + y.1)
    }

    fn put_edge(&self, &(weight, cost): &Self::Value) -> Self::Value {
        // 辺を1本降りると部分木の全頂点が1ずつ遠くなる
        (weight, cost + weight)
    }

    fn put_vertex(&self, &(weight, cost): &Self::Value, v: usize) -> Self::Value {
        (weight + self.a[v], cost)
    }
}
