use crate::problem::Judge;
use proconio::input;
use rustc_hash::FxHashMap;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        k: u32,
        a: [u32; n],
    }

    judge.answer(max_nonzero_segments(&a, k));
}

/// 各要素を補数に反転してよいとき、xorが0でない区間の最大数
fn max_nonzero_segments(a: &[u32], k: u32) -> u64 {
    let n = a.len() as u64;
    let mask = (1u32 << k) - 1;

    // 接頭辞xorは p と p ^ mask のどちらにもできるので、小さい方を代表にまとめる
    let mut classes = FxHashMap::default();
    let mut prefix = 0;
    *classes.entry(0).or_insert(0u64) += 1;

    for &x in a {
        prefix ^= x;
        *classes.entry(prefix.min(prefix ^ mask)).or_insert(0) += 1;
    }

    // 同じ値の接頭辞の組がxor 0の区間。各類を2つに等分すると最小になる
    let zero_segments = classes
        .values()
        .map(|&c| {
            let half = c / 2;
            let rest = c - half;
            half * half.saturating_sub(1) / 2 + rest * rest.saturating_sub(1) / 2
        })
        .sum::<u64>();

    n * (n + 1) / 2 - zero_segments
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("5\n", run(solve, "3 2\n1 3 0\n"));
        assert_eq!("19\n", run(solve, "6 3\n1 4 4 7 3 4\n"));
    }
}
