use crate::{geometry::Point, problem::Judge};
use proconio::input;
use rustc_hash::FxHashMap;

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

    judge.answer(non_degenerate_triangles(&points));
}

/// 全3点組から、一直線に並ぶ組を引く
fn non_degenerate_triangles(points: &[Point]) -> u64 {
    let n = points.len() as u64;
    let all = if n >= 3 { n * (n - 1) * (n - 2) / 6 } else { 0 };
    let mut collinear = 0;

    for (i, &p) in points.iter().enumerate() {
        // p を最小番号とする3点組を、p からの方向ごとに数える
        let mut directions = FxHashMap::default();

        for &q in points[i + 1..].iter() {
            *directions
                .entry((q - p).normalized_direction())
                .or_insert(0u64) += 1;
        }

        collinear += directions
            .values()
            .map(|&c| c * c.saturating_sub(1) / 2)
            .sum::<u64>();
    }

    all - collinear
}

#[cfg(test)]
mod test {
    use super::{non_degenerate_triangles, solve};
    use crate::{
        geometry::{is_collinear, Point},
        problem::run,
    };
    use itertools::Itertools;
    use rand::Rng;
    use rand_core::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn samples() {
        assert_eq!("3\n", run(solve, "4\n0 0\n1 1\n2 0\n2 2\n"));
        assert_eq!("1\n", run(solve, "3\n0 0\n1 1\n2 0\n"));
        assert_eq!("0\n", run(solve, "1\n1 1\n"));
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);

        for _ in 0..30 {
            let n = rng.gen_range(1..=12);
            let points = (0..n)
                .map(|_| Point::new(rng.gen_range(-3..=3), rng.gen_range(-3..=3)))
                .unique()
                .collect_vec();

            let expected = points
                .iter()
                .tuple_combinations()
                .filter(|&(&a, &b, &c)| !is_collinear(a, b, c))
                .count();

            assert_eq!(expected as u64, non_degenerate_triangles(&points));
        }
    }
}
