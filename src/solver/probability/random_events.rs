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
            m: usize,
            a: [usize; n],
            experiments: [(usize, f64); m],
        }

        judge.answer_float(sorted_probability(&a, &experiments), 6);
    }
}

/// 最後の位置ずれ k を含む接頭辞ソートが1回でも成功する確率
fn sorted_probability(a: &[usize], experiments: &[(usize, f64)]) -> f64 {
    let Some(k) = (0..a.len()).rev().find(|&i| a[i] != i + 1) else {
        return 1.0;
    };

    let all_fail = experiments
        .iter()
        .filter(|&&(r, _)| r > k)
        .map(|&(_, p)| 1.0 - p)
        .product::<f64>();

    1.0 - all_fail
}
