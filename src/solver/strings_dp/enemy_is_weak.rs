use crate::{data_structures::FenwickTree, problem::Judge};
use itertools::Itertools;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        a: [u32; n],
    }

    judge.answer(weakness(&a));
}

/// i < j < k かつ a_i > a_j > a_k の組の数
fn weakness(a: &[u32]) -> u64 {
    let n = a.len();
    let sorted = a.iter().copied().sorted().collect_vec();
    let rank = a
        .iter()
        .map(|x| sorted.partition_point(|y| y < x))
        .collect_vec();

    let mut left = FenwickTree::<u64>::new(n);
    let mut greater_left = vec![0; n];

    for (j, &r) in rank.iter().enumerate() {
        greater_left[j] = j as u64 - left.prefix_sum(r + 1);
        left.add(r, 1);
    }

    let mut right = FenwickTree::<u64>::new(n);
    let mut total = 0;

    for (j, &r) in rank.iter().enumerate().rev() {
        let smaller_right = right.prefix_sum(r);
        total += greater_left[j] * smaller_right;
        right.add(r, 1);
    }

    total
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("1\n", run(solve, "3\n3 2 1\n"));
        assert_eq!("0\n", run(solve, "3\n2 3 1\n"));
        assert_eq!("4\n", run(solve, "4\n10 8 3 1\n"));
        assert_eq!("1\n", run(solve, "4\n1 5 4 3\n"));
    }
}
