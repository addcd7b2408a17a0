use crate::{
    geometry::{is_collinear, Point},
    problem::Judge,
};
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

    judge.answer(if covered_by_two_lines(&points) { "YES" } else { "NO" });
}

fn covered_by_two_lines(points: &[Point]) -> bool {
    if points.len() <= 4 {
        return true;
    }

    // 最初の3点のうち2点は同じ直線に乗る
    [(0, 1), (0, 2), (1, 2)].iter().any(|&(i, j)| {
        let (a, b) = (points[i], points[j]);
        let rest = points
            .iter()
            .copied()
            .filter(|&p| !is_collinear(a, b, p))
            .collect::<Vec<_>>();

        all_collinear(&rest)
    })
}

fn all_collinear(points: &[Point]) -> bool {
    match points {
        [a, b, rest @ ..] => rest.iter().all(|&p| is_collinear(*a, *b, p)),
        _ => true,
    }
}
