use crate::problem::Judge;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        h: Usize1,
        s: [usize; m],
    }

    match teammate_probability(n, h, &s) {
        Some(p) => judge.answer_float(p, 10),
        None => judge.answer(-1),
    }
}

/// 自分の学科から他に1人以上選ばれる確率
fn teammate_probability(n: usize, h: usize, s: &[usize]) -> Option<f64> {
    let total = s.iter().sum::<usize>();

    if total < n {
        return None;
    }

    // 残り n - 1 人が全員他学科から選ばれる確率 C(others, n-1) / C(total-1, n-1)
    let others = total - s[h];
    let mut none = 1.0;

    for i in 0..n - 1 {
        if others < i + 1 {
            none = 0.0;
            break;
        }

        none *= (others - i) as f64 / (total - 1 - i) as f64;
    }

    Some(1.0 - none)
}
