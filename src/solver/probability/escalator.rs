use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        p: f64,
        t: usize,
    }

    judge.answer_float(expected_riders(n, p, t), 9);
}

/// t 秒後にエスカレーターに乗っている人数の期待値
fn expected_riders(n: usize, p: f64, t: usize) -> f64 {
    // dp[k]: k 人が乗り終えている確率
    let mut dp = vec![0.0; n + 1];
    dp[0] = 1.0;

    for _ in 0..t {
        let mut next = vec![0.0; n + 1];
        next[n] = dp[n];

        for k in 0..n {
            next[k + 1] += dp[k] * p;
            next[k] += dp[k] * (1.0 - p);
        }

        dp = next;
    }

    dp.iter().enumerate().map(|(k, &q)| k as f64 * q).sum()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[0.5], &run(solve, "1 0.50 1\n"));
        assert_floats(&[0.9375], &run(solve, "1 0.50 4\n"));
        assert_floats(&[0.4], &run(solve, "4 0.20 2\n"));
    }
}
