use crate::{
    math::{mobius, ModInt1000000007},
    problem::Judge,
};
use proconio::input;

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        a: [usize; n],
    }

    judge.answer(coprime_subsequences(&a));
}

/// gcd が1となる空でない部分列の数
///
/// d の倍数だけからなる部分列は 2^cnt[d] - 1 個あり、メビウス関数で包除する
fn coprime_subsequences(a: &[usize]) -> Mint {
    let max = a.iter().copied().max().unwrap_or(1);
    let mut freq = vec![0usize; max + 1];

    for &x in a {
        freq[x] += 1;
    }

    let mu = mobius(max);
    let mut pow2 = vec![Mint::one(); a.len() + 1];

    for i in 1..pow2.len() {
        pow2[i] = pow2[i - 1] * Mint::new(2);
    }

    let mut result = Mint::zero();

    for d in 1..=max {
        if mu[d] == 0 {
            continue;
        }

        let count = (d..=max).step_by(d).map(|m| freq[m]).sum::<usize>();
        let subsequences = pow2[count] - Mint::one();

        if mu[d] > 0 {
            result += subsequences;
        } else {
            result -= subsequences;
        }
    }

    result
}

#[cfg(test)]
mod test {
    use super::{coprime_subsequences, solve};
    use crate::{math::gcd, problem::run};
    use rand::Rng;
    use rand_core::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn samples() {
        assert_eq!("5\n", run(solve, "3\n1 2 3\n"));
        assert_eq!("15\n", run(solve, "4\n1 1 1 1\n"));
        assert_eq!("100\n", run(solve, "7\n1 3 5 15 3 105 35\n"));
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        for _ in 0..50 {
            let n = rng.gen_range(1..=10);
            let a = (0..n).map(|_| rng.gen_range(1..=30)).collect::<Vec<usize>>();

            let expected = (1u32..1 << n)
                .filter(|mask| {
                    let g = (0..n)
                        .filter(|i| mask >> i & 1 == 1)
                        .fold(0, |g, i| gcd(g, a[i] as u64));
                    g == 1
                })
                .count();

            assert_eq!(expected as u32, coprime_subsequences(&a).value());
        }
    }
}
