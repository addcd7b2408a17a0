use crate::{
    graph::{bfs_distances, bridges, Graph},
    problem::Judge,
};
use log::trace;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    judge.answer(max_bosses(n, &edges));
}

/// 2辺連結成分で縮約した木 (橋の木) の直径
fn max_bosses(n: usize, edges: &[(usize, usize)]) -> usize {
    let graph = Graph::from_edges(n, edges);
    let is_bridge = bridges(&graph);

    // 橋以外の辺でたどれる範囲に同じ成分番号を振る
    let mut component = vec![usize::MAX; n];
    let mut component_count = 0;

    for start in 0..n {
        if component[start] != usize::MAX {
            continue;
        }

        component[start] = component_count;
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            for &(u, id) in graph.edges(v) {
                if !is_bridge[id] && component[u] == usize::MAX {
                    component[u] = component_count;
                    stack.push(u);
                }
            }
        }

        component_count += 1;
    }

    let bridge_edges = edges
        .iter()
        .enumerate()
        .filter(|&(id, _)| is_bridge[id])
        .map(|(_, &(u, v))| (component[u], component[v]))
        .collect::<Vec<_>>();
    let tree = Graph::from_edges(component_count, &bridge_edges);
    trace!(
        "{} bridges, {} two-edge-connected components",
        bridge_edges.len(),
        component_count
    );

    let farthest = |start: usize| {
        bfs_distances(&tree, start)
            .into_iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (d, v)))
            .max()
            .unwrap_or((0, start))
    };

    let (_, end) = farthest(0);
    let (diameter, _) = farthest(end);
    diameter
}
