use crate::{geometry::Point, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        points: [(i64, i64); n + 1],
    }

    let points = points
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();

    // コースは時計回りなので、左折する角で直進すると湖に落ちる
    let dangerous = points
        .windows(3)
        .filter(|w| (w[1] - w[0]).cross(w[2] - w[1]) > 0)
        .count();

    judge.answer(dangerous);
}
