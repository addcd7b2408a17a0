use crate::{
    geometry::{Line, Point},
    problem::Judge,
};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        home: (i64, i64),
        university: (i64, i64),
        n: usize,
        roads: [(i64, i64, i64); n],
    }

    let home = Point::new(home.0, home.1);
    let university = Point::new(university.0, university.1);

    // 2点を分ける直線はどの経路でも必ず1回は横切る
    let steps = roads
        .into_iter()
        .map(|(a, b, c)| Line::new(a, b, c))
        .filter(|line| line.side(home) != line.side(university))
        .count();

    judge.answer(steps);
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("2\n", run(solve, "1 1\n-1 -1\n2\n0 1 0\n1 0 0\n"));
        assert_eq!("2\n", run(solve, "1 1\n-1 -1\n3\n1 0 0\n0 1 0\n1 1 -3\n"));
    }
}
