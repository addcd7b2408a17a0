use crate::{geometry::Point, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        points: [(i64, i64); n],
    }

    let points = points
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();

    let count = points
        .iter()
        .filter(|&&p| is_supercentral(p, &points))
        .count();

    judge.answer(count);
}

/// 上下左右それぞれに同じ行・列の点がある
fn is_supercentral(p: Point, points: &[Point]) -> bool {
    let mut found = [false; 4];

    for &q in points {
        let d = q - p;

        match (d.x.signum(), d.y.signum()) {
            (1, 0) => found[0] = true,
            (-1, 0) => found[1] = true,
            (0, 1) => found[2] = true,
            (0, -1) => found[3] = true,
            _ => {}
        }
    }

    found.iter().all(|&f| f)
}
