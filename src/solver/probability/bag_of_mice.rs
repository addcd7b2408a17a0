use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        w: usize,
        b: usize,
    }

    judge.answer_float(princess_wins(w, b), 9);
}

fn princess_wins(w: usize, b: usize) -> f64 {
    // dp[i][j]: 白 i 匹・黒 j 匹の状態で姫の番のときの勝率
    let mut dp = vec![vec![0.0; b + 1]; w + 1];

    for i in 1..=w {
        dp[i][0] = 1.0;

        for j in 1..=b {
            let total = (i + j) as f64;
            let mut p = i as f64 / total;

            // 姫が黒、竜も黒を引き、1匹逃げる
            if j >= 2 {
                let after_dragon = j as f64 / total * (j - 1) as f64 / (total - 1.0);
                let rest = total - 2.0;

                if j >= 3 {
                    p += after_dragon * (j - 2) as f64 / rest * dp[i][j - 3];
                }

                p += after_dragon * i as f64 / rest * dp[i - 1][j - 2];
            }

            dp[i][j] = p;
        }
    }

    dp[w][b]
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[0.5], &run(solve, "1 3\n"));
        assert_floats(&[0.658730159], &run(solve, "5 5\n"));
    }

    #[test]
    fn no_white_mice() {
        assert_floats(&[0.0], &run(solve, "0 5\n"));
        assert_floats(&[1.0], &run(solve, "3 0\n"));
    }
}
