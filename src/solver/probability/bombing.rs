use crate::problem::Judge;
use proconio::input;

const ITERATIONS: usize = 100;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: usize,
        eps: f64,
        center: (i64, i64),
        objects: [(i64, i64); n],
    }

    let dist2 = objects
        .iter()
        .map(|&(x, y)| {
            let (dx, dy) = (x - center.0, y - center.1);
            (dx * dx + dy * dy) as f64
        })
        .collect::<Vec<_>>();

    judge.answer_float(min_radius(&dist2, k, eps / 1000.0), 12);
}

/// 破壊数が k 未満になる確率が `limit` 以下となる最小の半径
fn min_radius(dist2: &[f64], k: usize, limit: f64) -> f64 {
    let mut ok = dist2.iter().copied().fold(0.0, f64::max).sqrt() + 1.0;
    let mut ng = 0.0;

    for _ in 0..ITERATIONS {
        let mid = (ok + ng) / 2.0;

        if failure_probability(dist2, k, mid) <= limit {
            ok = mid;
        } else {
            ng = mid;
        }
    }

    ok
}

fn failure_probability(dist2: &[f64], k: usize, r: f64) -> f64 {
    let n = dist2.len();
    // dp[c]: c 個壊れている確率
    let mut dp = vec![0.0; n + 1];
    dp[0] = 1.0;

    for &d2 in dist2.iter() {
        let p = if d2 <= r * r {
            1.0
        } else if r == 0.0 {
            0.0
        } else {
            (1.0 - d2 / (r * r)).exp()
        };

        for c in (0..n).rev() {
            dp[c + 1] += dp[c] * p;
            dp[c] *= 1.0 - p;
        }
    }

    dp[..k].iter().sum()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[3.84257761518762740], &run(solve, "1\n1 500\n5 5\n1 2\n"));
        assert_floats(
            &[13.45126176453737600],
            &run(
                solve,
                "5\n3 100\n0 0\n3 4\n60 70\n100 100\n10 10\n5 12\n",
            ),
        );
    }
}
