use crate::problem::Judge;
use itertools::Itertools;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        points: [(i64, i64); 3],
    }

    judge.answer(min_segments(&points));
}

/// 3点を通る軸平行な折れ線の最小線分数
fn min_segments(points: &[(i64, i64)]) -> usize {
    let xs = points.iter().map(|p| p.0).collect_vec();
    let ys = points.iter().map(|p| p.1).collect_vec();

    if xs.iter().all_equal() || ys.iter().all_equal() {
        return 1;
    }

    // 2点が同じ軸上に並び、残りの1点がその2点の間に挟まれていなければ2本
    for (i, j, k) in [(0, 1, 2), (0, 2, 1), (1, 2, 0)] {
        let outside = |a: i64, b: i64, c: i64| c <= a.min(b) || c >= a.max(b);

        if xs[i] == xs[j] && outside(ys[i], ys[j], ys[k]) {
            return 2;
        }

        if ys[i] == ys[j] && outside(xs[i], xs[j], xs[k]) {
            return 2;
        }
    }

    3
}
