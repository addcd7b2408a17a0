use crate::problem::Judge;
use itertools::Itertools;
use proconio::input;

/// 5次元では互いに鈍角をなすベクトルは高々10本なので、
/// これより多い点があれば良い点は存在しない
const MAX_GOOD_CANDIDATES: usize = 11;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        points: [[i64; 5]; n],
    }

    let good = good_points(&points);
    judge.answer(good.len());

    for i in good {
        judge.answer(i + 1);
    }
}

/// 他のどの2点とも鋭角をなさない点
fn good_points(points: &[Vec<i64>]) -> Vec<usize> {
    if points.len() > MAX_GOOD_CANDIDATES {
        return vec![];
    }

    (0..points.len())
        .filter(|&a| {
            let vectors = (0..points.len())
                .filter(|&b| b != a)
                .map(|b| (0..5).map(|d| points[b][d] - points[a][d]).collect_vec())
                .collect_vec();

            vectors.iter().tuple_combinations().all(|(u, v)| {
                let dot: i64 = u.iter().zip(v.iter()).map(|(x, y)| x * y).sum();
                dot <= 0
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "1\n1\n",
            run(
                solve,
                "6\n0 0 0 0 0\n1 0 0 0 0\n0 1 0 0 0\n0 0 1 0 0\n0 0 0 1 0\n0 0 0 0 1\n"
            )
        );
        assert_eq!(
            "0\n",
            run(solve, "3\n0 0 1 2 0\n0 0 9 2 0\n0 0 5 9 0\n")
        );
    }

    #[test]
    fn every_point_of_a_pair_is_good() {
        assert_eq!("2\n1\n2\n", run(solve, "2\n0 0 0 0 0\n1 2 3 4 5\n"));
    }
}
