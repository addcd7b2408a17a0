use crate::{
    math::{Factorial, ModInt1000000007},
    problem::Judge,
};
use proconio::input;
use rustc_hash::FxHashMap;

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: usize,
        a: [u64; n],
    }

    judge.answer(lucky_subsequences(&a, k));
}

fn is_lucky(mut x: u64) -> bool {
    while x > 0 {
        if x % 10 != 4 && x % 10 != 7 {
            return false;
        }

        x /= 10;
    }

    true
}

/// 同じ幸運数を2つ含まない長さ k の部分列 (添字集合) の数
fn lucky_subsequences(a: &[u64], k: usize) -> Mint {
    let mut lucky: FxHashMap<u64, u64> = FxHashMap::default();
    let mut unlucky = 0;

    for &x in a.iter() {
        if is_lucky(x) {
            *lucky.entry(x).or_default() += 1;
        } else {
            unlucky += 1;
        }
    }

    // ways[j]: 相異なる幸運数を j 種類選ぶ方法 (出現位置の選び方込み)
    let mut ways = vec![Mint::one()];

    for &count in lucky.values() {
        ways.push(Mint::zero());

        for j in (1..ways.len()).rev() {
            let prev = ways[j - 1];
            ways[j] += prev * Mint::new(count);
        }
    }

    let fact = Factorial::<1_000_000_007>::new(unlucky);

    ways.iter()
        .enumerate()
        .filter(|&(j, _)| j <= k && k - j <= unlucky)
        .map(|(j, &w)| w * fact.comb(unlucky, k - j))
        .sum()
}

#[cfg(test)]
mod test {
    use super::{is_lucky, solve};
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("3\n", run(solve, "3 2\n10 10 10\n"));
        assert_eq!("4\n", run(solve, "4 2\n4 4 7 7\n"));
    }

    #[test]
    fn lucky_numbers() {
        assert!(is_lucky(4));
        assert!(is_lucky(747));
        assert!(!is_lucky(741));
        assert!(!is_lucky(10));
    }
}
