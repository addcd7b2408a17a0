use crate::{math::ModInt1000000007, problem::Judge};
use proconio::input;

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        k: usize,
        pa: u64,
        pb: u64,
    }

    judge.answer(expected_pairs(k, pa, pb));
}

/// 'ab' 部分列が k 個以上になった時点で止めたときの個数の期待値
fn expected_pairs(k: usize, pa: u64, pb: u64) -> Mint {
    let sum = Mint::new(pa + pb);
    let a = Mint::new(pa) / sum;
    let b = Mint::new(pb) / sum;

    // i + j >= k なら次の b で必ず止まる。それまでに増える a の個数の期待値は pa / pb
    let tail = Mint::new(pa) / Mint::new(pb);

    // dp[i][j]: 'a' が i 個、'ab' が j 個ある状態からの期待値
    let mut dp = vec![vec![Mint::zero(); k + 1]; k + 1];

    for i in (1..=k).rev() {
        for j in (0..k).rev() {
            dp[i][j] = if i + j >= k {
                Mint::from(i + j) + tail
            } else {
                a * dp[i + 1][j] + b * dp[i][i + j]
            };
        }
    }

    // 先頭の 'b' は無視できるので、最初の 'a' を置いた状態から始める
    dp[1][0]
}
