use crate::{
    data_structures::XorBasis,
    math::{factorize_with, smallest_prime_factors, ModInt1000000007},
    problem::Judge,
};
use proconio::input;

type Mint = ModInt1000000007;

const MAX_VALUE: usize = 70;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        a: [usize; n],
    }

    judge.answer(square_subsets(&a));
}

/// 積が平方数になる空でない部分集合の数
///
/// 各値を素因数の指数の偶奇ベクトルとみなすと、xorが0になる部分集合を数えればよい
fn square_subsets(a: &[usize]) -> Mint {
    let spf = smallest_prime_factors(MAX_VALUE);
    let primes = (2..=MAX_VALUE).filter(|&p| spf[p] == p).collect::<Vec<_>>();
    let mut basis = XorBasis::new();

    for &x in a {
        let mask = factorize_with(&spf, x)
            .into_iter()
            .filter(|&(_, e)| e % 2 == 1)
            .filter_map(|(p, _)| primes.iter().position(|&q| q == p))
            .fold(0u64, |mask, i| mask | 1 << i);

        basis.insert(mask);
    }

    Mint::new(2).pow((a.len() - basis.rank()) as u64) - Mint::one()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("15\n", run(solve, "4\n1 1 1 1\n"));
        assert_eq!("7\n", run(solve, "4\n2 2 2 2\n"));
        assert_eq!("7\n", run(solve, "5\n1 2 4 5 8\n"));
    }
}
