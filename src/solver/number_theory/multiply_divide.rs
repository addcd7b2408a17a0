use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [u64; t],
    }

    for n in queries {
        match moves(n) {
            Some(count) => judge.answer(count),
            None => judge.answer(-1),
        }
    }
}

/// n = 2^a 3^b のとき、b >= a なら 2(b - a) + a = 2b - a 手
fn moves(mut n: u64) -> Option<u32> {
    let mut twos = 0;
    let mut threes = 0;

    while n % 2 == 0 {
        n /= 2;
        twos += 1;
    }

    while n % 3 == 0 {
        n /= 3;
        threes += 1;
    }

    (n == 1 && twos <= threes).then(|| 2 * threes - twos)
}
