use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        quarries: [(u64, u64); n],
    }

    let nim = quarries
        .iter()
        .fold(0, |acc, &(x, m)| acc ^ xor_upto(x + m - 1) ^ xor_upto(x - 1));

    judge.answer(if nim != 0 { "tolik" } else { "bolik" });
}

/// 0 xor 1 xor ... xor n
fn xor_upto(n: u64) -> u64 {
    match n % 4 {
        0 => n,
        1 => 1,
        2 => n + 1,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::{solve, xor_upto};
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("tolik\n", run(solve, "2\n2 1\n3 2\n"));
        assert_eq!("bolik\n", run(solve, "4\n1 1\n1 1\n1 1\n1 1\n"));
    }

    #[test]
    fn prefix_xor() {
        let mut acc = 0;

        for n in 0..100 {
            acc ^= n;
            assert_eq!(acc, xor_upto(n));
        }
    }
}
