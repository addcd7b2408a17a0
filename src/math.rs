use std::{
    fmt::Display,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

pub type ModInt1000000007 = StaticModInt<1_000_000_007>;
pub type ModInt998244353 = StaticModInt<998_244_353>;

/// 法 `M` の剰余環の元。除算は `M` が素数のときのみ意味を持つ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StaticModInt<const M: u32> {
    value: u32,
}

#[allow(dead_code)]
impl<const M: u32> StaticModInt<M> {
    pub const fn modulus() -> u32 {
        M
    }

    pub fn new(value: u64) -> Self {
        Self {
            value: (value % M as u64) as u32,
        }
    }

    pub fn from_i64(value: i64) -> Self {
        Self {
            value: value.rem_euclid(M as i64) as u32,
        }
    }

    pub const fn zero() -> Self {
        Self { value: 0 }
    }

    pub const fn one() -> Self {
        Self { value: 1 % M }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub fn pow(&self, mut exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = *self;

        while exp > 0 {
            if exp & 1 == 1 {
                result *= base;
            }

            base *= base;
            exp >>= 1;
        }

        result
    }

    /// フェルマーの小定理による逆元
    pub fn inv(&self) -> Self {
        assert!(self.value != 0, "0 has no inverse");
        self.pow(M as u64 - 2)
    }
}

impl<const M: u32> From<u32> for StaticModInt<M> {
    fn from(value: u32) -> Self {
        Self::new(value as u64)
    }
}

impl<const M: u32> From<u64> for StaticModInt<M> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const M: u32> From<usize> for StaticModInt<M> {
    fn from(value: usize) -> Self {
        Self::new(value as u64)
    }
}

impl<const M: u32> Display for StaticModInt<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const M: u32> Add for StaticModInt<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut value = self.value + rhs.value;

        if value >= M {
            value -= M;
        }

        Self { value }
    }
}

impl<const M: u32> Sub for StaticModInt<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let value = if self.value >= rhs.value {
            self.value - rhs.value
        } else {
            self.value + M - rhs.value
        };

        Self { value }
    }
}

impl<const M: u32> Mul for StaticModInt<M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.value as u64 * rhs.value as u64)
    }
}

impl<const M: u32> Div for StaticModInt<M> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inv()
    }
}

impl<const M: u32> Neg for StaticModInt<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::zero() - self
    }
}

macro_rules! impl_assign_ops {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl<const M: u32> $trait for StaticModInt<M> {
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign_ops! {
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
}

impl<const M: u32> Sum for StaticModInt<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<const M: u32> Product for StaticModInt<M> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

/// 階乗とその逆元のテーブル
#[derive(Debug, Clone)]
pub struct Factorial<const M: u32> {
    fact: Vec<StaticModInt<M>>,
    inv_fact: Vec<StaticModInt<M>>,
}

#[allow(dead_code)]
impl<const M: u32> Factorial<M> {
    pub fn new(n: usize) -> Self {
        let mut fact = vec![StaticModInt::one(); n + 1];

        for i in 1..=n {
            fact[i] = fact[i - 1] * StaticModInt::from(i);
        }

        let mut inv_fact = vec![StaticModInt::one(); n + 1];
        inv_fact[n] = fact[n].inv();

        for i in (1..=n).rev() {
            inv_fact[i - 1] = inv_fact[i] * StaticModInt::from(i);
        }

        Self { fact, inv_fact }
    }

    pub fn fact(&self, n: usize) -> StaticModInt<M> {
        self.fact[n]
    }

    pub fn inv_fact(&self, n: usize) -> StaticModInt<M> {
        self.inv_fact[n]
    }

    pub fn comb(&self, n: usize, k: usize) -> StaticModInt<M> {
        if k > n {
            return StaticModInt::zero();
        }

        self.fact[n] * self.inv_fact[k] * self.inv_fact[n - k]
    }
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// 各整数の最小素因数 (0, 1 は自分自身)
pub fn smallest_prime_factors(n: usize) -> Vec<usize> {
    let mut spf = (0..=n).collect::<Vec<_>>();
    let mut p = 2;

    while p * p <= n {
        if spf[p] == p {
            for multiple in (p * p..=n).step_by(p) {
                if spf[multiple] == multiple {
                    spf[multiple] = p;
                }
            }
        }

        p += 1;
    }

    spf
}

/// 試し割りによる素因数分解 (素因数, 指数) の昇順
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = vec![];
    let mut p = 2;

    while p * p <= n {
        if n % p == 0 {
            let mut e = 0;

            while n % p == 0 {
                n /= p;
                e += 1;
            }

            factors.push((p, e));
        }

        p += 1;
    }

    if n > 1 {
        factors.push((n, 1));
    }

    factors
}

/// 最小素因数テーブルを使った素因数分解
pub fn factorize_with(spf: &[usize], mut n: usize) -> Vec<(usize, u32)> {
    let mut factors: Vec<(usize, u32)> = vec![];

    while n > 1 {
        let p = spf[n];

        match factors.last_mut() {
            Some((q, e)) if *q == p => *e += 1,
            _ => factors.push((p, 1)),
        }

        n /= p;
    }

    factors
}

/// 約数の昇順列挙
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = vec![];
    let mut large = vec![];
    let mut d = 1;

    while d * d <= n {
        if n % d == 0 {
            small.push(d);

            if d * d != n {
                large.push(n / d);
            }
        }

        d += 1;
    }

    small.extend(large.into_iter().rev());
    small
}

/// メビウス関数 μ(0..=n)
pub fn mobius(n: usize) -> Vec<i8> {
    let spf = smallest_prime_factors(n);
    let mut mu = vec![0; n + 1];

    if n >= 1 {
        mu[1] = 1;
    }

    for i in 2..=n {
        let p = spf[i];
        let rest = i / p;

        mu[i] = if rest % p == 0 { 0 } else { -mu[rest] };
    }

    mu
}

#[cfg(test)]
mod test {
    use super::{
        divisors, factorize, factorize_with, gcd, mobius, smallest_prime_factors, Factorial,
        ModInt1000000007, StaticModInt,
    };

    type Mint = ModInt1000000007;

    #[test]
    fn mod_arithmetic() {
        let a = Mint::new(1_000_000_006);
        let b = Mint::new(5);
        assert_eq!(4, (a + b).value());
        assert_eq!(1_000_000_001, (a - b).value());
        assert_eq!(1_000_000_002, (a * b).value());
        assert_eq!(1, (b / b).value());
        assert_eq!(1, (b * b.inv()).value());
        assert_eq!(1_000_000_002, (-b).value());
        assert_eq!(1_000_000_006, Mint::from_i64(-1).value());
        assert_eq!(1024, Mint::new(2).pow(10).value());
        assert_eq!(15, [b, b, b].into_iter().sum::<Mint>().value());
        assert_eq!(125, [b, b, b].into_iter().product::<Mint>().value());
    }

    #[test]
    fn non_prime_modulus() {
        type M8 = StaticModInt<100_000_000>;
        let a = M8::new(99_999_999);
        assert_eq!(0, (a + M8::one()).value());
        assert_eq!("99999999", a.to_string());
    }

    #[test]
    fn factorial() {
        let f = Factorial::<1_000_000_007>::new(10);
        assert_eq!(3_628_800, f.fact(10).value());
        assert_eq!(252, f.comb(10, 5).value());
        assert_eq!(1, f.comb(10, 0).value());
        assert_eq!(0, f.comb(3, 4).value());
        assert_eq!(1, (f.fact(7) * f.inv_fact(7)).value());
    }

    #[test]
    fn number_theory() {
        assert_eq!(6, gcd(12, 18));
        assert_eq!(7, gcd(7, 0));
        assert_eq!(vec![(2, 2), (3, 1), (823, 1)], factorize(4 * 3 * 823));
        assert_eq!(vec![(999_999_733, 1)], factorize(999_999_733));
        assert_eq!(vec![1, 2, 3, 4, 6, 12], divisors(12));
        assert_eq!(vec![1, 7, 49], divisors(49));

        let spf = smallest_prime_factors(100);
        assert_eq!(2, spf[64]);
        assert_eq!(97, spf[97]);
        assert_eq!(vec![(2, 2), (5, 2)], factorize_with(&spf, 100));

        let mu = mobius(10);
        assert_eq!(vec![0, 1, -1, -1, 0, -1, 1, -1, 0, 0, 1], mu);
    }
}
