use crate::{math::factorize, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: u64,
    }

    judge.answer(max_score(n));
}

/// 毎回最小素因数の行数に並べて1行だけ残すと和が最大
fn max_score(mut n: u64) -> u64 {
    let mut total = n;

    while n > 1 {
        let p = factorize(n).first().map_or(n, |&(p, _)| p);
        n /= p;
        total += n;
    }

    total
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("16\n", run(solve, "10\n"));
        assert_eq!("15\n", run(solve, "8\n"));
    }
}
