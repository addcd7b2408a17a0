use crate::{
    graph::{Graph, RootedTree},
    problem::Judge,
};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        cats: [u8; n],
        edges: [(Usize1, Usize1); n - 1],
    }

    let graph = Graph::from_edges(n, &edges);
    let tree = RootedTree::new(&graph, 0);

    // 根からの連続する猫の数。m を超えた頂点より下は探索しない
    let mut streak = vec![0; n];
    let mut blocked = vec![false; n];
    let mut restaurants = 0;

    for &v in tree.order.iter() {
        let (parent_streak, parent_blocked) = match tree.parent[v] {
            Some(p) => (streak[p], blocked[p]),
            None => (0, false),
        };

        streak[v] = if cats[v] == 1 { parent_streak + 1 } else { 0 };
        blocked[v] = parent_blocked || streak[v] > m;

        let is_leaf = v != tree.root && graph.degree(v) == 1;

        if is_leaf && !blocked[v] {
            restaurants += 1;
        }
    }

    judge.answer(restaurants);
}
