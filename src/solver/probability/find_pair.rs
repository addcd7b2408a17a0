use crate::problem::Judge;
use itertools::Itertools;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: u64,
        a: [i64; n],
    }

    let (x, y) = kth_pair(&a, k - 1);
    judge.answer(format!("{} {}", x, y));
}

/// n^2 個の組 (a_i, a_j) を辞書順に並べたときの k 番目 (0-indexed)
fn kth_pair(a: &[i64], k: u64) -> (i64, i64) {
    let a = a.iter().copied().sorted().collect_vec();
    let n = a.len() as u64;
    let first = a[(k / n) as usize];

    // first で始まる組は (first の個数) * n 個あり、2番目の値ごとに個数ずつ並ぶ
    let begin = a.partition_point(|&x| x < first) as u64;
    let count = a.partition_point(|&x| x <= first) as u64 - begin;
    let rest = k - begin * n;

    (first, a[(rest / count) as usize])
}

#[cfg(test)]
mod test {
    use super::{kth_pair, solve};
    use crate::problem::run;
    use itertools::{iproduct, Itertools};

    #[test]
    fn samples() {
        assert_eq!("2 2\n", run(solve, "2 4\n2 1\n"));
        assert_eq!("1 3\n", run(solve, "3 2\n3 1 5\n"));
    }

    #[test]
    fn matches_sorted_pairs() {
        let a = [3, 1, 3, -2, 1, 3];
        let pairs = iproduct!(a.iter().copied(), a.iter().copied())
            .sorted()
            .collect_vec();

        for (k, &pair) in pairs.iter().enumerate() {
            assert_eq!(pair, kth_pair(&a, k as u64));
        }
    }
}
