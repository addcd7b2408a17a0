use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [u64; t],
    }

    for n in queries {
        judge.answer(first_day_amount(n));
    }
}

/// x + 2x + ... + 2^(k-1)x = n となる x (k >= 2)
fn first_day_amount(n: u64) -> u64 {
    (2..63)
        .map(|k| (1u64 << k) - 1)
        .find(|d| n % d == 0)
        .map_or(n, |d| n / d)
}
