use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [(u64, u64); t],
    }

    for (a, b) in queries {
        match shifts(a, b) {
            Some(count) => judge.answer(count),
            None => judge.answer(-1),
        }
    }
}

/// 2, 4, 8 倍または割り算で a を b にする最小回数
fn shifts(a: u64, b: u64) -> Option<u32> {
    let (small, large) = (a.min(b), a.max(b));

    if large % small != 0 {
        return None;
    }

    let ratio = large / small;

    if !ratio.is_power_of_two() {
        return None;
    }

    Some((ratio.trailing_zeros() + 2) / 3)
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        let input = "10\n10 5\n11 44\n17 21\n1 1\n96 3\n2 128\n1001 1100611139403776\n\
                     1000000000000000000 1000000000000000000\n7 1\n10 8\n";
        assert_eq!("1\n1\n-1\n0\n2\n2\n14\n0\n-1\n-1\n", run(solve, input));
    }
}
