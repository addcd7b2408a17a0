use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        r: usize,
        s: usize,
        p: usize,
    }

    let (rock, scissors, paper) = survival(r, s, p);
    judge.answer(format!("{:.12} {:.12} {:.12}", rock, scissors, paper));
}

/// 各種族だけが生き残る確率
fn survival(r: usize, s: usize, p: usize) -> (f64, f64, f64) {
    let mut dp = vec![vec![vec![0.0; p + 1]; s + 1]; r + 1];
    dp[r][s][p] = 1.0;

    // 出会いは常に個体数を1減らすので、多い状態から順に確定する
    for i in (0..=r).rev() {
        for j in (0..=s).rev() {
            for k in (0..=p).rev() {
                let prob = dp[i][j][k];
                let rs = (i * j) as f64;
                let sp = (j * k) as f64;
                let pr = (k * i) as f64;
                let total = rs + sp + pr;

                if prob == 0.0 || total == 0.0 {
                    continue;
                }

                if j > 0 {
                    dp[i][j - 1][k] += prob * rs / total;
                }

                if k > 0 {
                    dp[i][j][k - 1] += prob * sp / total;
                }

                if i > 0 {
                    dp[i - 1][j][k] += prob * pr / total;
                }
            }
        }
    }

    let rock = (1..=r).map(|i| dp[i][0][0]).sum();
    let scissors = (1..=s).map(|j| dp[0][j][0]).sum();
    let paper = (1..=p).map(|k| dp[0][0][k]).sum();
    (rock, scissors, paper)
}
