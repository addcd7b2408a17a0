use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Bytes};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        grid: [Bytes; n],
    }

    judge.answer(if has_cycle(&grid, m) { "Yes" } else { "No" });
}

/// 同色の隣接マスを辺とみなし、既に連結な2マスを結ぶ辺があれば閉路
///
/// グリッドグラフの閉路は必ず長さ4以上
fn has_cycle(grid: &[Vec<u8>], m: usize) -> bool {
    let n = grid.len();
    let mut uf = UnionFind::new(n * m);

    for i in 0..n {
        for j in 0..m {
            let neighbors = [(i + 1, j), (i, j + 1)];

            for (ni, nj) in neighbors {
                if ni >= n || nj >= m || grid[i][j] != grid[ni][nj] {
                    continue;
                }

                if !uf.unite(i * m + j, ni * m + nj) {
                    return true;
                }
            }
        }
    }

    false
}
