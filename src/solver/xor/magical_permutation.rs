use crate::{data_structures::XorBasis, problem::Judge};
use itertools::Itertools;
use log::trace;
use proconio::input;

const MAX_BITS: usize = 20;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        s: [u32; n],
    }

    let (x, permutation) = magical_permutation(&s);
    judge.answer(x);
    judge.answer_iter(permutation);
}

/// 隣接要素のxorがすべて s に含まれる 0..2^x の順列で、x が最大のもの
fn magical_permutation(s: &[u32]) -> (usize, Vec<u32>) {
    let sorted = s.iter().copied().sorted().collect_vec();

    for x in (1..=MAX_BITS).rev() {
        // 2^x 未満の要素から x 個の独立な要素を選べれば、それを生成元にしたGray符号で並べられる
        let mut basis = XorBasis::new();
        let mut generators = vec![];

        for &v in sorted.iter().take_while(|&&v| v < 1 << x) {
            if basis.insert(v as u64) {
                generators.push(v);
            }
        }

        if generators.len() == x {
            trace!("x = {}, generators = {:?}", x, generators);

            let permutation = (0u32..1 << x)
                .map(|i| {
                    let gray = i ^ (i >> 1);
                    (0..x)
                        .filter(|&b| gray >> b & 1 == 1)
                        .fold(0, |acc, b| acc ^ generators[b])
                })
                .collect();

            return (x, permutation);
        }
    }

    (0, vec![0])
}

#[cfg(test)]
mod test {
    use super::{magical_permutation, solve};
    use crate::problem::run;
    use itertools::Itertools;

    #[test]
    fn samples() {
        assert_eq!("2\n0 1 3 2\n", run(solve, "3\n1 2 3\n"));
        assert_eq!("2\n0 2 1 3\n", run(solve, "2\n2 3\n"));
        assert_eq!("3\n0 1 3 2 6 7 5 4\n", run(solve, "4\n1 2 3 4\n"));
        assert_eq!("0\n0\n", run(solve, "2\n2 4\n"));
        assert_eq!("0\n0\n", run(solve, "1\n20\n"));
        assert_eq!("1\n0 1\n", run(solve, "1\n1\n"));
    }

    #[test]
    fn permutation_is_magical() {
        let s = vec![1, 3, 6, 12, 15];
        let (x, permutation) = magical_permutation(&s);
        assert_eq!(4, x);
        assert_eq!((0..16).collect_vec(), permutation.iter().copied().sorted().collect_vec());

        for w in permutation.windows(2) {
            assert!(s.contains(&(w[0] ^ w[1])));
        }
    }
}
