use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [u64; t],
    }

    for n in queries {
        match split(n) {
            Some((a, b, c)) => {
                judge.answer("YES");
                judge.answer_iter([a, b, c]);
            }
            None => judge.answer("NO"),
        }
    }
}

/// 相異なる a < b < c で a * b * c = n となる組
fn split(n: u64) -> Option<(u64, u64, u64)> {
    let a = (2u64..).take_while(|a| a * a <= n).find(|a| n % a == 0)?;
    let m = n / a;
    let b = (a + 1..).take_while(|b| b * b < m).find(|b| m % b == 0)?;
    Some((a, b, m / b))
}
