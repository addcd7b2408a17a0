use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        basins: [usize; m],
    }

    judge.answer_float(expected_longest_queue(n, &basins), 12);
}

/// 各学生が部屋を一様に選ぶときの最長の列の長さの期待値
fn expected_longest_queue(n: usize, basins: &[usize]) -> f64 {
    let comb = binomials(n);
    let total = (basins.len() as f64).powi(n as i32);

    let mut expected = 0.0;
    let mut prev = 0.0;

    for limit in 1..=n {
        // 全部屋の列が limit 以下になる割り当ての数
        let mut dp = vec![0.0; n + 1];
        dp[0] = 1.0;

        for &b in basins.iter() {
            let mut next = vec![0.0; n + 1];

            for (used, &ways) in dp.iter().enumerate() {
                for k in 0..=(n - used).min(limit * b) {
                    next[used + k] += ways * comb[n - used][k];
                }
            }

            dp = next;
        }

        let at_most = dp[n] / total;
        expected += limit as f64 * (at_most - prev);
        prev = at_most;
    }

    expected
}

fn binomials(n: usize) -> Vec<Vec<f64>> {
    let mut comb = vec![vec![0.0; n + 1]; n + 1];

    for i in 0..=n {
        comb[i][0] = 1.0;

        for j in 1..=i {
            comb[i][j] = comb[i - 1][j - 1] + comb[i - 1][j];
        }
    }

    comb
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[1.0], &run(solve, "1 1\n2\n"));
        assert_floats(&[1.5], &run(solve, "2 2\n1 1\n"));
        assert_floats(&[1.33333333333333350000], &run(solve, "2 3\n1 1 1\n"));
        assert_floats(&[2.50216960000000070000], &run(solve, "7 5\n1 1 2 3 1\n"));
    }
}
