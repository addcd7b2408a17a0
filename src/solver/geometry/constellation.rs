use crate::{
    geometry::{is_collinear, Point},
    problem::Judge,
};
use itertools::Itertools;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        stars: [(i64, i64); n],
    }

    let stars = stars
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect_vec();

    if let Some(triangle) = empty_triangle(&stars) {
        judge.answer_iter(triangle.iter().map(|i| i + 1));
    }
}

/// 他の星を内部にも周上にも含まない三角形
///
/// 辞書順で最小の2点と、それらと一直線に並ばない最初の点を選ぶ。
/// 3点目より前の点は2点を結ぶ直線の先に、後の点は三角形の右側にある
fn empty_triangle(stars: &[Point]) -> Option<[usize; 3]> {
    let order = (0..stars.len()).sorted_by_key(|&i| stars[i]).collect_vec();
    let (&a, &b) = (order.first()?, order.get(1)?);

    order[2..]
        .iter()
        .find(|&&c| !is_collinear(stars[a], stars[b], stars[c]))
        .map(|&c| [a, b, c])
}
