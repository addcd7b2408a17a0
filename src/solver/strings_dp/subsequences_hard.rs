use crate::problem::Judge;
use log::trace;
use proconio::{input, marker::Bytes};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        _n: usize,
        k: u64,
        s: Bytes,
    }

    match min_total_cost(&s, k) {
        Some(cost) => judge.answer(cost),
        None => judge.answer(-1),
    }
}

/// 長さごとの相異なる部分列の数
///
/// 長さ100なら高々 2^100 通りなので i128 に収まる
fn distinct_subsequences(s: &[u8]) -> Vec<i128> {
    let n = s.len();
    let mut dp = vec![vec![0i128; n + 1]; n + 1];
    let mut last: [Option<usize>; 256] = [None; 256];
    dp[0][0] = 1;

    for i in 1..=n {
        let c = s[i - 1] as usize;
        dp[i][0] = 1;

        for len in 1..=i {
            dp[i][len] = dp[i - 1][len] + dp[i - 1][len - 1];

            // 同じ文字で終わる部分列の重複を除く
            if let Some(j) = last[c] {
                dp[i][len] -= dp[j - 1][len - 1];
            }
        }

        last[c] = Some(i);
    }

    dp.swap_remove(n)
}

/// 長い部分列から順に k 個取る。1個あたりのコストは削除した文字数
fn min_total_cost(s: &[u8], k: u64) -> Option<u64> {
    let n = s.len();
    let counts = distinct_subsequences(s);
    trace!("distinct subsequences by length: {:?}", counts);

    let mut rest = k as i128;
    let mut cost = 0;

    for len in (0..=n).rev() {
        let take = rest.min(counts[len]);
        cost += take * (n - len) as i128;
        rest -= take;

        if rest == 0 {
            return Some(cost as u64);
        }
    }

    None
}
