use crate::problem::Judge;
use proconio::input;

/// 容量はこの範囲に丸めても結果が変わらない
const MAX_CAPACITY: i64 = 200;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        l: usize,
        k: i64,
        p: [u32; n],
        a: [i64; n],
    }

    judge.answer_float(success_probability(l, k, &p, &a), 12);
}

/// l 回以上勝ち、かつ持ち帰る賞品が全てバッグに収まる確率
///
/// 容量は大賞品 (-1) で1減り、バッグで増える。途中で負になってもよい
fn success_probability(l: usize, k: i64, p: &[u32], a: &[i64]) -> f64 {
    let n = p.len();
    let width = (2 * MAX_CAPACITY + 1) as usize;
    let index = |c: i64| (c.clamp(-MAX_CAPACITY, MAX_CAPACITY) + MAX_CAPACITY) as usize;

    // dp[w][c]: w 回勝って容量が c の確率
    let mut dp = vec![vec![0.0; width]; n + 1];
    dp[0][index(k)] = 1.0;

    for (i, (&percent, &prize)) in p.iter().zip(a.iter()).enumerate() {
        let win = percent as f64 / 100.0;
        let mut next = vec![vec![0.0; width]; n + 1];

        for w in 0..=i {
            for c in 0..width {
                let q = dp[w][c];

                if q == 0.0 {
                    continue;
                }

                next[w][c] += q * (1.0 - win);
                let capacity = c as i64 - MAX_CAPACITY + prize;
                next[w + 1][index(capacity)] += q * win;
            }
        }

        dp = next;
    }

    dp[l..]
        .iter()
        .map(|row| row[index(0)..].iter().sum::<f64>())
        .sum()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(&[0.3], &run(solve, "3 1 0\n10 20 30\n-1 -1 2\n"));
        assert_floats(&[1.0], &run(solve, "1 1 1\n100\n123\n"));
    }

    #[test]
    fn no_room_for_huge_prize() {
        assert_floats(&[0.0], &run(solve, "1 1 0\n100\n-1\n"));
        assert_floats(&[0.5], &run(solve, "1 0 0\n50\n-1\n"));
    }
}
