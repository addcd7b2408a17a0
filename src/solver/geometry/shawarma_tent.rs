use crate::{geometry::Point, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        school: (i64, i64),
        houses: [(i64, i64); n],
    }

    let school = Point::new(school.0, school.1);
    let houses = houses
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();

    let (count, tent) = best_tent(school, &houses);
    judge.answer(count);
    judge.answer(tent);
}

/// 学校に隣接する4マスのうち、最短路上に来る生徒が最も多い位置
///
/// 同数なら右, 左, 上, 下の順で先のものを選ぶ
fn best_tent(school: Point, houses: &[Point]) -> (usize, Point) {
    let directions = [
        Point::new(1, 0),
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(0, -1),
    ];

    let mut best = (0, school + directions[0]);

    for dir in directions {
        let count = houses
            .iter()
            .filter(|&&h| (h - school).dot(dir) > 0)
            .count();

        if count > best.0 {
            best = (count, school + dir);
        }
    }

    best
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("3\n4 2\n", run(solve, "4 3 2\n1 3\n4 2\n5 1\n4 1\n"));
        assert_eq!("2\n99 100\n", run(solve, "3 100 100\n0 0\n0 0\n100 200\n"));
        assert_eq!(
            "4\n11 12\n",
            run(
                solve,
                "7 10 12\n5 6\n20 23\n15 4\n16 5\n4 54\n12 1\n4 15\n"
            )
        );
    }
}
