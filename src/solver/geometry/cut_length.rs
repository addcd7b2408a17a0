use crate::{
    geometry::{chord_length, Point},
    problem::Judge,
};
use proconio::input;

/// 座標は小数第2位までなので100倍して整数で扱う
const SCALE: f64 = 100.0;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        polygon: [(f64, f64); n],
        lines: [(f64, f64, f64, f64); m],
    }

    let polygon = polygon
        .into_iter()
        .map(|(x, y)| scaled(x, y))
        .collect::<Vec<_>>();

    for (x0, y0, x1, y1) in lines {
        let length = chord_length(&polygon, scaled(x0, y0), scaled(x1, y1));
        judge.answer_float(length / SCALE, 12);
    }
}

fn scaled(x: f64, y: f64) -> Point {
    Point::new((x * SCALE).round() as i64, (y * SCALE).round() as i64)
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{common::assert_floats, problem::run};

    #[test]
    fn samples() {
        assert_floats(
            &[std::f64::consts::SQRT_2, 1.0, 0.0],
            &run(
                solve,
                "4 3\n0 0\n1 0\n1 1\n0 1\n0 0 1 1\n0 0 0 1\n0 0 1 -1\n",
            ),
        );
    }

    #[test]
    fn decimal_coordinates() {
        assert_floats(
            &[282842.705403551284689456, 0.009999999994761311, 0.0],
            &run(
                solve,
                "3 3\n100000 100000\n-99999.99 -100000\n-100000 -100000\n\
                 100000 100000 -99999.99 -100000\n\
                 -99999.99 -100000 -100000 -100000\n\
                 -100000 -100000 -100000 -99999.99\n",
            ),
        );
    }
}
