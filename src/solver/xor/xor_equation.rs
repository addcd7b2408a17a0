use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        s: u64,
        x: u64,
    }

    judge.answer(count_pairs(s, x));
}

/// a + b = s, a xor b = x となる正整数の順序対 (a, b) の数
fn count_pairs(s: u64, x: u64) -> u64 {
    // a + b = (a xor b) + 2 (a and b)
    if s < x || (s - x) % 2 == 1 {
        return 0;
    }

    let and = (s - x) / 2;

    if and & x != 0 {
        return 0;
    }

    // x の立っているbitはどちらに振ってもよい
    let count = 1u64 << x.count_ones();

    // a = 0 または b = 0 を除く
    if s == x {
        count - 2
    } else {
        count
    }
}

#[cfg(test)]
mod test {
    use super::{count_pairs, solve};
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("4\n", run(solve, "9 5\n"));
        assert_eq!("2\n", run(solve, "3 3\n"));
        assert_eq!("0\n", run(solve, "5 2\n"));
    }

    #[test]
    fn matches_brute_force() {
        for s in 2..64 {
            for x in 0..64 {
                let expected = (1..s).filter(|&a| a ^ (s - a) == x).count();
                assert_eq!(expected as u64, count_pairs(s, x), "s = {}, x = {}", s, x);
            }
        }
    }
}
