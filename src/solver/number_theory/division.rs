use crate::{math::factorize, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [(u64, u64); t],
    }

    for (p, q) in queries {
        judge.answer(largest_divisor(p, q));
    }
}

/// q で割り切れない p の約数の最大値
fn largest_divisor(p: u64, q: u64) -> u64 {
    if p % q != 0 {
        return p;
    }

    // q の素因数のどれか1つについて、p の指数を q の指数未満まで下げる
    factorize(q)
        .into_iter()
        .map(|(prime, q_exp)| {
            let mut x = p;
            let mut p_exp = 0;

            while x % prime == 0 {
                x /= prime;
                p_exp += 1;
            }

            p / prime.pow(p_exp - q_exp + 1)
        })
        .max()
        .unwrap_or(1)
}
