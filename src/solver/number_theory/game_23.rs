use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: u64,
        m: u64,
    }

    match moves(n, m) {
        Some(count) => judge.answer(count),
        None => judge.answer(-1),
    }
}

fn moves(n: u64, m: u64) -> Option<u32> {
    if m % n != 0 {
        return None;
    }

    let mut rest = m / n;
    let mut count = 0;

    for p in [2, 3] {
        while rest % p == 0 {
            rest /= p;
            count += 1;
        }
    }

    (rest == 1).then_some(count)
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("7\n", run(solve, "120 51840\n"));
        assert_eq!("0\n", run(solve, "42 42\n"));
        assert_eq!("-1\n", run(solve, "48 72\n"));
    }
}
