use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        q: usize,
        queries: [u64; q],
    }

    for a in queries {
        judge.answer(max_gcd(a));
    }
}

/// 1 <= b < a における gcd(a xor b, a and b) の最大値
fn max_gcd(a: u64) -> u64 {
    let all_ones = u64::MAX >> a.leading_zeros();

    if a != all_ones {
        // b を a の補数にすると gcd(2^k - 1, 0)
        return all_ones;
    }

    // a = 2^k - 1 なら gcd(a - b, b) = gcd(a, b) なので a の最大の真の約数
    (2..)
        .take_while(|d| d * d <= a)
        .find(|d| a % d == 0)
        .map_or(1, |d| a / d)
}

#[cfg(test)]
mod test {
    use super::{max_gcd, solve};
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("3\n1\n7\n", run(solve, "3\n2\n3\n5\n"));
    }

    #[test]
    fn all_ones() {
        assert_eq!(5, max_gcd(15));
        assert_eq!(1, max_gcd(31));
        assert_eq!(21, max_gcd(63));
    }
}
