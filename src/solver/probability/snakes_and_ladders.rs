use crate::problem::Judge;
use proconio::input;

const SIZE: usize = 10;
const CELLS: usize = SIZE * SIZE;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        h: [[usize; SIZE]; SIZE],
    }

    judge.answer_float(expected_turns(&h), 10);
}

/// ゴールまでの残りマス数 → (行, 列)。行0が最上段
fn cell_of(rest: usize) -> (usize, usize) {
    // ゴールは左上。最上段は右から左へ進む
    let row = rest / SIZE;
    let offset = rest % SIZE;
    let col = if row % 2 == 0 { offset } else { SIZE - 1 - offset };
    (row, col)
}

fn rest_of(row: usize, col: usize) -> usize {
    let offset = if row % 2 == 0 { col } else { SIZE - 1 - col };
    row * SIZE + offset
}

/// 梯子を最適に使ったときの、スタートからゴールまでの手番数の期待値
fn expected_turns(h: &[Vec<usize>]) -> f64 {
    // dp[rest]: 残り rest マスの位置からの期待手番数
    let mut dp = [0.0f64; CELLS];

    for rest in 1..CELLS {
        let moves = rest.min(6);
        let mut sum = 6.0;

        for step in 1..=moves {
            let to = rest - step;
            let (row, col) = cell_of(to);
            let mut best = dp[to];

            if h[row][col] > 0 {
                let top = rest_of(row - h[row][col], col);
                best = best.min(dp[top]);
            }

            sum += best;
        }

        // 出目が大きすぎる場合はその場に留まる
        dp[rest] = sum / moves as f64;
    }

    dp[CELLS - 1]
}

#[cfg(test)]
mod test {
    use super::{cell_of, rest_of, solve};
    use crate::{common::assert_floats, problem::run};

    fn board(rows: &[&str]) -> String {
        rows.iter().map(|r| format!("{}\n", r)).collect()
    }

    #[test]
    fn path_order() {
        assert_eq!((0, 0), cell_of(0));
        assert_eq!((0, 9), cell_of(9));
        assert_eq!((1, 9), cell_of(10));
        assert_eq!((9, 0), cell_of(99));
        assert_eq!(37, rest_of(cell_of(37).0, cell_of(37).1));
    }

    #[test]
    fn samples() {
        let empty = board(&["0 0 0 0 0 0 0 0 0 0"; 10]);
        assert_floats(&[33.0476190476], &run(solve, &empty));

        let ladders = board(&[
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 3 0 0 0 4 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 4 0 0 0",
            "0 0 3 0 0 0 0 0 0 0",
            "0 0 4 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 9",
        ]);
        assert_floats(&[20.2591405923], &run(solve, &ladders));

        let row = board(&[
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 6 6 6 6 6 6 0 0 0",
            "1 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0",
        ]);
        assert_floats(&[15.9047592939], &run(solve, &row));
    }
}
