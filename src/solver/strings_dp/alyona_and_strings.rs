use crate::problem::Judge;
use proconio::{input, marker::Bytes};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        _n: usize,
        _m: usize,
        k: usize,
        s: Bytes,
        t: Bytes,
    }

    judge.answer(max_total_length(&s, &t, k));
}

/// s と t に同じ順で現れる k 個の互いに素な部分文字列の長さの和の最大値
///
/// 部分文字列は分割しても長さが変わらないので「高々 k 個」で数えてよい
fn max_total_length(s: &[u8], t: &[u8], k: usize) -> usize {
    let (n, m) = (s.len(), t.len());

    // common[i][j]: s[..i] と t[..j] の共通接尾辞の長さ
    let mut common = vec![vec![0; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if s[i - 1] == t[j - 1] {
                common[i][j] = common[i - 1][j - 1] + 1;
            }
        }
    }

    let mut prev = vec![vec![0; m + 1]; n + 1];

    for _ in 0..k {
        let mut dp = vec![vec![0; m + 1]; n + 1];

        for i in 1..=n {
            for j in 1..=m {
                let mut best = dp[i - 1][j].max(dp[i][j - 1]);
                let len = common[i][j];

                // 共通接尾辞は最長まで取ってよい
                if len > 0 {
                    best = best.max(prev[i - len][j - len] + len);
                }

                dp[i][j] = best;
            }
        }

        prev = dp;
    }

    prev[n][m]
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("2\n", run(solve, "3 2 2\nabc\nab\n"));
        assert_eq!(
            "7\n",
            run(solve, "9 12 4\nbbaaababb\nabbbabbaaaba\n")
        );
    }
}
