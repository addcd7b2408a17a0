use crate::{math::factorize, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: u64,
    }

    judge.answer(max_colors(n));
}

/// n が素数冪 p^k なら p 色、異なる素因数が2つ以上あれば1色
fn max_colors(n: u64) -> u64 {
    match factorize(n).as_slice() {
        [] => 1,
        [(p, _)] => *p,
        _ => 1,
    }
}
