use crate::{
    math::{factorize_with, smallest_prime_factors, Factorial, ModInt1000000007},
    problem::Judge,
};
use proconio::input;

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        q: usize,
        queries: [(usize, usize); q],
    }

    let max_x = queries.iter().map(|&(x, _)| x).max().unwrap_or(1);
    let max_y = queries.iter().map(|&(_, y)| y).max().unwrap_or(1);
    let spf = smallest_prime_factors(max_x);

    // 指数は高々 log2(x) なので C(e + y - 1, y - 1) には y + 20 まであれば足りる
    let factorial = Factorial::<1_000_000_007>::new(max_y + 32);

    for (x, y) in queries {
        // 各素因数の指数を y 箇所に重複組合せで配り、符号は最後以外自由
        let arrangements = factorize_with(&spf, x)
            .into_iter()
            .map(|(_, e)| factorial.comb(e as usize + y - 1, y - 1))
            .product::<Mint>();
        let signs = Mint::new(2).pow(y as u64 - 1);

        judge.answer(arrangements * signs);
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("36\n6\n", run(solve, "2\n6 3\n4 2\n"));
    }

    #[test]
    fn x_equals_one() {
        // 全要素が ±1 で積が1
        assert_eq!("4\n", run(solve, "1\n1 3\n"));
    }
}
