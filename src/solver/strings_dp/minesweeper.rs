use crate::{math::ModInt1000000007, problem::Judge};
use proconio::{input, marker::Bytes};

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        field: Bytes,
    }

    judge.answer(count_fields(&field));
}

/// セル i の文字が、左右 (a, c) と自身 b の爆弾の有無と矛盾しないか
fn is_consistent(cell: u8, a: usize, b: usize, c: usize) -> bool {
    match cell {
        b'*' => b == 1,
        b'?' => true,
        digit => b == 0 && a + c == (digit - b'0') as usize,
    }
}

fn count_fields(field: &[u8]) -> Mint {
    let n = field.len();

    // dp[a][b]: セル i-1, i の爆弾の有無
    let mut dp = [[Mint::zero(); 2]; 2];
    dp[0][0] = Mint::one();
    dp[0][1] = Mint::one();

    for (i, &cell) in field.iter().enumerate() {
        let mut next = [[Mint::zero(); 2]; 2];
        let max_c = if i + 1 == n { 0 } else { 1 };

        for a in 0..2 {
            for b in 0..2 {
                for c in 0..=max_c {
                    if is_consistent(cell, a, b, c) {
                        next[b][c] += dp[a][b];
                    }
                }
            }
        }

        dp = next;
    }

    dp.iter().flatten().copied().sum()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("4\n", run(solve, "?01???\n"));
        assert_eq!("2\n", run(solve, "?\n"));
        assert_eq!("0\n", run(solve, "**12\n"));
        assert_eq!("0\n", run(solve, "1\n"));
    }

    #[test]
    fn fixed_fields() {
        assert_eq!("1\n", run(solve, "*2*\n"));
        assert_eq!("1\n", run(solve, "0\n"));
        assert_eq!("0\n", run(solve, "*0\n"));
    }
}
