use crate::{math::factorize, problem::Judge};
use proconio::input;
use std::iter::repeat;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [u64; t],
    }

    for n in queries {
        let sequence = longest_sequence(n);
        judge.answer(sequence.len());
        judge.answer_iter(sequence);
    }
}

/// 積が n で、各項が前の項で割り切れる最長の列
///
/// 指数最大の素数 p を並べ、最後の項に残りを全て掛ける
fn longest_sequence(n: u64) -> Vec<u64> {
    let Some((p, exp)) = factorize(n).into_iter().max_by_key(|&(_, exp)| exp) else {
        return vec![n];
    };

    let last = n / p.pow(exp - 1);
    repeat(p).take(exp as usize - 1).chain([last]).collect()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "1\n2\n3\n2 2 90\n1\n4999999937\n1\n4998207083\n",
            run(solve, "4\n2\n360\n4999999937\n4998207083\n")
        );
    }
}
