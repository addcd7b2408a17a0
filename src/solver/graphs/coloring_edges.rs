use crate::problem::Judge;
use proconio::{input, marker::Usize1};
use std::collections::VecDeque;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    let colors = color_edges(n, &edges);
    judge.answer(colors.iter().max().copied().unwrap_or(1));
    judge.answer_iter(colors);
}

/// 単色の閉路を作らない最小色数の塗り分け
///
/// 閉路がなければ1色。あれば番号の増える辺と減る辺で分ければ2色で足りる
fn color_edges(n: usize, edges: &[(usize, usize)]) -> Vec<u8> {
    if is_acyclic(n, edges) {
        vec![1; edges.len()]
    } else {
        edges
            .iter()
            .map(|&(u, v)| if u < v { 1 } else { 2 })
            .collect()
    }
}

/// Kahnの方法でトポロジカル順に全頂点を取り出せるか
fn is_acyclic(n: usize, edges: &[(usize, usize)]) -> bool {
    let mut out = vec![vec![]; n];
    let mut indegree = vec![0; n];

    for &(u, v) in edges {
        out[u].push(v);
        indegree[v] += 1;
    }

    let mut queue = (0..n).filter(|&v| indegree[v] == 0).collect::<VecDeque<_>>();
    let mut visited = 0;

    while let Some(v) = queue.pop_front() {
        visited += 1;

        for &u in out[v].iter() {
            indegree[u] -= 1;

            if indegree[u] == 0 {
                queue.push_back(u);
            }
        }
    }

    visited == n
}
