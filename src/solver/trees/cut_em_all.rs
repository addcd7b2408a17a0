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

    // 奇数頂点では偶数サイズの成分に分けられない
    if n % 2 == 1 {
        judge.answer(-1);
        return;
    }

    let graph = Graph::from_edges(n, &edges);
    let tree = RootedTree::new(&graph, 0);
    let sizes = tree.subtree_sizes();
    let removable = (0..n)
        .filter(|&v| v != tree.root && sizes[v] % 2 == 0)
        .count();

    judge.answer(removable);
}
