use crate::{math::factorize, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        q: u64,
    }

    match winning_move(q) {
        Some(first) => {
            judge.answer(1);
            judge.answer(first);
        }
        None => judge.answer(2),
    }
}

/// 先手が勝つなら最初に書く数 (書けないなら 0)
///
/// 素因数がちょうど2個の数に書いた人が勝つ。q 自身がそうなら後手の勝ち
fn winning_move(q: u64) -> Option<u64> {
    let primes = factorize(q)
        .into_iter()
        .flat_map(|(p, e)| std::iter::repeat(p).take(e as usize))
        .take(3)
        .collect::<Vec<_>>();

    match primes.len() {
        0 | 1 => Some(0),
        2 => None,
        _ => Some(primes[0] * primes[1]),
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("2\n", run(solve, "6\n"));
        assert_eq!("1\n6\n", run(solve, "30\n"));
        assert_eq!("1\n0\n", run(solve, "1\n"));
    }

    #[test]
    fn prime_power() {
        assert_eq!("1\n4\n", run(solve, "8\n"));
        assert_eq!("1\n0\n", run(solve, "13\n"));
    }
}
