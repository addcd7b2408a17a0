use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
    }

    for _ in 0..t {
        input! {
            from judge.source(),
            n: usize,
            x: [u32; n],
        }

        judge.answer_iter(co_growing_partner(&x));
    }
}

/// x xor y が各項で前の項のbitを全て含む、辞書順最小の y
fn co_growing_partner(x: &[u32]) -> Vec<u32> {
    let mut required = 0;

    x.iter()
        .map(|&xi| {
            let y = required & !xi;
            required = xi ^ y;
            y
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        let input = "5\n4\n1 3 7 15\n4\n1 2 4 8\n5\n1 2 3 4 5\n4\n11 13 15 1\n1\n0\n";
        let expected = "0 0 0 0\n0 1 3 7\n0 1 0 3 2\n0 2 0 14\n0\n";
        assert_eq!(expected, run(solve, input));
    }
}
