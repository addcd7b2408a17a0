use crate::{common::ChangeMinMax, problem::Judge};
use itertools::Itertools;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        p: [f64; n],
    }

    judge.answer_float(best_exactly_one(&p), 12);
}

/// ちょうど1人だけが問題を作る確率の最大値
///
/// 確率の高い順に何人かへ頼むのが最適なので、接頭辞だけを調べる
fn best_exactly_one(p: &[f64]) -> f64 {
    if p.iter().any(|&x| x >= 1.0) {
        return 1.0;
    }

    let mut best = 0.0f64;
    let mut none = 1.0;
    let mut odds = 0.0;

    for x in p.iter().copied().sorted_by(|a, b| b.total_cmp(a)) {
        none *= 1.0 - x;
        odds += x / (1.0 - x);
        best.change_max(none * odds);
    }

    best
}
