use crate::{math::StaticModInt, problem::Judge};
use proconio::input;

type Mint = StaticModInt<100_000_000>;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n1: usize,
        n2: usize,
        k1: usize,
        k2: usize,
    }

    judge.answer(arrangements(n1, n2, k1, k2));
}

/// 歩兵が k1 人、騎兵が k2 人より長く連続しない並べ方
fn arrangements(n1: usize, n2: usize, k1: usize, k2: usize) -> Mint {
    // foot[i][j]: 歩兵 i 人・騎兵 j 人を並べ、最後が歩兵の連
    let mut foot = vec![vec![Mint::zero(); n2 + 1]; n1 + 1];
    let mut horse = vec![vec![Mint::zero(); n2 + 1]; n1 + 1];
    foot[0][0] = Mint::one();
    horse[0][0] = Mint::one();

    for i in 0..=n1 {
        for j in 0..=n2 {
            if i + j == 0 {
                continue;
            }

            foot[i][j] = (1..=k1.min(i)).map(|t| horse[i - t][j]).sum();
            horse[i][j] = (1..=k2.min(j)).map(|t| foot[i][j - t]).sum();
        }
    }

    foot[n1][n2] + horse[n1][n2]
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("1\n", run(solve, "2 1 1 10\n"));
        assert_eq!("5\n", run(solve, "2 3 1 2\n"));
        assert_eq!("0\n", run(solve, "2 4 1 1\n"));
    }
}
