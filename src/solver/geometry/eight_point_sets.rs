use crate::problem::Judge;
use itertools::{iproduct, Itertools};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        points: [(i64, i64); 8],
    }

    judge.answer(if is_respectable(&points) {
        "respectable"
    } else {
        "ugly"
    });
}

/// 3本の縦線と3本の横線の交点9個から中央を除いたものか
fn is_respectable(points: &[(i64, i64)]) -> bool {
    let xs = points.iter().map(|p| p.0).sorted().dedup().collect_vec();
    let ys = points.iter().map(|p| p.1).sorted().dedup().collect_vec();

    if xs.len() != 3 || ys.len() != 3 {
        return false;
    }

    let expected = iproduct!(xs.iter(), ys.iter())
        .filter(|&(&x, &y)| (x, y) != (xs[1], ys[1]))
        .map(|(&x, &y)| (x, y))
        .collect_vec();

    points.iter().copied().sorted().collect_vec() == expected
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "respectable\n",
            run(solve, "0 0\n0 1\n0 2\n1 0\n1 2\n2 0\n2 1\n2 2\n")
        );
        assert_eq!(
            "ugly\n",
            run(solve, "0 0\n1 0\n2 0\n3 0\n4 0\n5 0\n6 0\n7 0\n")
        );
        assert_eq!(
            "ugly\n",
            run(solve, "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n")
        );
    }

    #[test]
    fn duplicated_point() {
        assert_eq!(
            "ugly\n",
            run(solve, "0 0\n0 0\n0 2\n1 0\n1 2\n2 0\n2 1\n2 2\n")
        );
    }
}
