use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        a: [usize; n],
        p: usize,
    }

    judge.answer_float(expected_guests(&a, p), 10);
}

/// 全ての到着順についての着席人数の平均
///
/// 最初に座れなかった客 i を固定し、それより前に座った k 人の組 (和 s) を数える。
/// そのような順列は k! (n - k - 1)! 通り
fn expected_guests(a: &[usize], p: usize) -> f64 {
    let n = a.len();

    if a.iter().sum::<usize>() <= p {
        return n as f64;
    }

    let fact = (0..=n)
        .scan(1.0, |acc, i| {
            if i > 0 {
                *acc *= i as f64;
            }
            Some(*acc)
        })
        .collect::<Vec<f64>>();

    let mut total = 0.0;

    for (i, &blocker) in a.iter().enumerate() {
        // dp[k][s]: i 以外から k 人選んで和が s になる組の数
        let mut dp = vec![vec![0.0; p + 1]; n];
        dp[0][0] = 1.0;

        for (j, &size) in a.iter().enumerate() {
            if j == i || size > p {
                continue;
            }

            for k in (0..n - 1).rev() {
                for s in (0..=p - size).rev() {
                    let ways = dp[k][s];
                    dp[k + 1][s + size] += ways;
                }
            }
        }

        for (k, row) in dp.iter().enumerate() {
            for (s, &ways) in row.iter().enumerate() {
                if s + blocker > p {
                    total += k as f64 * ways * fact[k] * fact[n - k - 1];
                }
            }
        }
    }

    total / fact[n]
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[1.3333333333], &run(solve, "3\n1 2 3\n3\n"));
    }

    #[test]
    fn everyone_fits() {
        assert_floats(&[4.0], &run(solve, "4\n1 1 1 1\n10\n"));
        assert_floats(&[0.0], &run(solve, "2\n5 6\n4\n"));
    }
}
