use crate::{math::factorize, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: u64,
    }

    judge.answer(subtractions(n));
}

fn subtractions(n: u64) -> u64 {
    if n % 2 == 0 {
        return n / 2;
    }

    // 奇数は最小素因数を1回引くと偶数になり、以降は2を引き続ける
    let p = factorize(n).first().map_or(n, |&(p, _)| p);
    1 + (n - p) / 2
}
