use crate::{geometry::Point, problem::Judge};
use itertools::Itertools;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        points: [(i64, i64); 8],
    }

    let points = points
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect_vec();

    match split(&points) {
        Some((square, rectangle)) => {
            judge.answer("YES");
            judge.answer_iter(square.iter().map(|i| i + 1));
            judge.answer_iter(rectangle.iter().map(|i| i + 1));
        }
        None => judge.answer("NO"),
    }
}

/// 正方形をなす4点と長方形をなす4点に分ける。添字は辞書順で最初のもの
fn split(points: &[Point]) -> Option<(Vec<usize>, Vec<usize>)> {
    (0..points.len()).combinations(4).find_map(|square| {
        let rectangle = (0..points.len())
            .filter(|i| !square.contains(i))
            .collect_vec();

        let pick = |indices: &[usize]| indices.iter().map(|&i| points[i]).collect_vec();

        (is_square(&pick(&square)) && is_rectangle(&pick(&rectangle)))
            .then_some((square, rectangle))
    })
}

/// 4点を巡回順に並べたもの。長方形にならなければNone
fn rectangle_order(p: &[Point]) -> Option<[Point; 4]> {
    [[0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3]]
        .into_iter()
        .map(|order| order.map(|i| p[i]))
        .find(|q| {
            (0..4).all(|i| {
                let prev = q[(i + 3) % 4] - q[i];
                let next = q[(i + 1) % 4] - q[i];
                prev.dot(next) == 0 && prev.norm2() > 0 && next.norm2() > 0
            })
        })
}

fn is_rectangle(p: &[Point]) -> bool {
    rectangle_order(p).is_some()
}

fn is_square(p: &[Point]) -> bool {
    rectangle_order(p).map_or(false, |q| (q[1] - q[0]).norm2() == (q[2] - q[1]).norm2())
}
