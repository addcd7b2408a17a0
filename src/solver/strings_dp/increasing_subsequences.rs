use crate::{data_structures::FenwickTree, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: usize,
        a: [usize; n],
    }

    judge.answer(count_increasing(&a, k + 1));
}

/// 値が 1..=n の順列で、長さ `len` の増加部分列の数
fn count_increasing(a: &[usize], len: usize) -> u64 {
    let n = a.len();

    // trees[l]: 値ごとの、そこで終わる長さ l + 1 の増加部分列の数
    let mut trees = (0..len).map(|_| FenwickTree::<u64>::new(n + 1)).collect::<Vec<_>>();

    for &x in a {
        trees[0].add(x, 1);

        for l in 1..len {
            let count = trees[l - 1].prefix_sum(x);
            trees[l].add(x, count);
        }
    }

    trees[len - 1].prefix_sum(n + 1)
}

#[cfg(test)]
mod test {
    use super::{count_increasing, solve};
    use crate::problem::run;
    use itertools::Itertools;

    #[test]
    fn samples() {
        assert_eq!("7\n", run(solve, "5 2\n1 2 3 5 4\n"));
    }

    #[test]
    fn matches_brute_force() {
        let a = vec![3, 1, 4, 6, 2, 5, 7];

        for len in 1..=4 {
            let expected = (0..a.len())
                .combinations(len)
                .filter(|c| c.windows(2).all(|w| a[w[0]] < a[w[1]]))
                .count();

            assert_eq!(expected as u64, count_increasing(&a, len));
        }
    }
}
