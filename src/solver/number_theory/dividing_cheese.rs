use crate::problem::Judge;
use proconio::input;

const EATABLE: [u64; 3] = [2, 3, 5];

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        a: u64,
        b: u64,
    }

    match operations(a, b) {
        Some(count) => judge.answer(count),
        None => judge.answer(-1),
    }
}

/// 2, 3, 5 で割る操作で a と b を揃える最小回数
fn operations(mut a: u64, mut b: u64) -> Option<u32> {
    let mut count = 0;

    for p in EATABLE {
        let ea = strip(&mut a, p);
        let eb = strip(&mut b, p);
        count += ea.abs_diff(eb);
    }

    (a == b).then_some(count)
}

fn strip(x: &mut u64, p: u64) -> u32 {
    let mut exp = 0;

    while *x % p == 0 {
        *x /= p;
        exp += 1;
    }

    exp
}
