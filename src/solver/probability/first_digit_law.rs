use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        ranges: [(u64, u64); n],
        k: usize,
    }

    let probabilities = ranges
        .iter()
        .map(|&(l, r)| (leading_ones(r) - leading_ones(l - 1)) as f64 / (r - l + 1) as f64)
        .collect::<Vec<_>>();

    judge.answer_float(at_least_percent(&probabilities, k), 12);
}

/// 1以上 x 以下で最上位桁が1の整数の個数
fn leading_ones(x: u64) -> u64 {
    let mut count = 0;
    let mut p = 1u64;

    while p <= x {
        // [p, 2p) のうち x 以下のもの
        count += x.min(2 * p - 1) - p + 1;

        match p.checked_mul(10) {
            Some(next) => p = next,
            None => break,
        }
    }

    count
}

/// 最上位桁が1である変数が全体の k% 以上になる確率
fn at_least_percent(probabilities: &[f64], k: usize) -> f64 {
    let n = probabilities.len();
    // dp[c]: c 個が1で始まる確率
    let mut dp = vec![0.0; n + 1];
    dp[0] = 1.0;

    for &q in probabilities.iter() {
        for c in (0..n).rev() {
            dp[c + 1] += dp[c] * q;
            dp[c] *= 1.0 - q;
        }
    }

    dp.iter()
        .enumerate()
        .filter(|&(c, _)| 100 * c >= k * n)
        .map(|(_, &q)| q)
        .sum()
}

#[cfg(test)]
mod test {
    use super::{leading_ones, solve};
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[0.5], &run(solve, "1\n1 2\n50\n"));
        assert_floats(&[0.833333333333333], &run(solve, "2\n1 2\n9 11\n50\n"));
    }

    #[test]
    fn count_leading_ones() {
        assert_eq!(0, leading_ones(0));
        assert_eq!(1, leading_ones(9));
        assert_eq!(2, leading_ones(10));
        assert_eq!(11, leading_ones(19));
        assert_eq!(12, leading_ones(100));
        assert_eq!(111_111_111_111_111_112, leading_ones(1_000_000_000_000_000_000));
    }
}
