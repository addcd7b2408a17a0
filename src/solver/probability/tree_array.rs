use crate::{
    graph::{bfs_distances, Graph},
    math::ModInt1000000007,
    problem::Judge,
};
use proconio::{input, marker::Usize1};

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        edges: [(Usize1, Usize1); n - 1],
    }

    let graph = Graph::from_edges(n, &edges);
    judge.answer(expected_inversions(&graph));
}

/// 根を一様に選び、印の付いた頂点に隣接する頂点を一様に選んで並べたときの転倒数の期待値
///
/// 根 r での頂点対 (a, b) は、lca からの距離 (x, y) だけで順序の確率が決まる。
/// どちらの枝も1歩進む確率は等しいので first[x][y] = (first[x-1][y] + first[x][y-1]) / 2
fn expected_inversions(graph: &Graph) -> Mint {
    let n = graph.len();
    let dist = (0..n)
        .map(|s| {
            bfs_distances(graph, s)
                .into_iter()
                .map(|d| d.unwrap_or(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // first[x][y]: lca から距離 x の頂点が距離 y の頂点より先に選ばれる確率
    let half = Mint::new(2).inv();
    let mut first = vec![vec![Mint::zero(); n + 1]; n + 1];

    for y in 1..=n {
        first[0][y] = Mint::one();
    }

    for x in 1..=n {
        for y in 1..=n {
            first[x][y] = (first[x - 1][y] + first[x][y - 1]) * half;
        }
    }

    let mut total = Mint::zero();

    for r in 0..n {
        for a in 0..n {
            // 番号の大きい a が b より先に来ると転倒
            for b in 0..a {
                let x = (dist[r][a] + dist[a][b] - dist[r][b]) / 2;
                let y = dist[a][b] - x;
                total += first[x][y];
            }
        }
    }

    total / Mint::from(n)
}
