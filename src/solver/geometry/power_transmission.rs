use crate::{geometry::Point, math::gcd, problem::Judge};
use proconio::input;
use rustc_hash::{FxHashMap, FxHashSet};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        poles: [(i64, i64); n],
    }

    let poles = poles
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();

    judge.answer(intersecting_pairs(&poles));
}

/// 2本以上の電柱を通る直線を重複なく数え、平行でない組を数える
fn intersecting_pairs(poles: &[Point]) -> u64 {
    // 傾き (a, b) ごとの切片 c の集合。直線は ax + by + c = 0
    let mut lines: FxHashMap<(i64, i64), FxHashSet<i64>> = FxHashMap::default();

    for (i, &p) in poles.iter().enumerate() {
        for &q in poles[i + 1..].iter() {
            let (a, b) = normal(p, q);
            let c = -(a * p.x + b * p.y);
            lines.entry((a, b)).or_default().insert(c);
        }
    }

    let total = lines.values().map(|s| s.len() as u64).sum::<u64>();
    let parallel = lines
        .values()
        .map(|s| s.len() as u64 * s.len() as u64)
        .sum::<u64>();

    (total * total - parallel) / 2
}

/// 直線 pq の法線ベクトルを既約・符号正規化したもの
fn normal(p: Point, q: Point) -> (i64, i64) {
    let a = q.y - p.y;
    let b = p.x - q.x;
    let g = gcd(a.unsigned_abs(), b.unsigned_abs()) as i64;
    let (a, b) = (a / g, b / g);

    if a < 0 || (a == 0 && b < 0) {
        (-a, -b)
    } else {
        (a, b)
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("14\n", run(solve, "4\n0 0\n1 1\n0 3\n1 2\n"));
        assert_eq!("6\n", run(solve, "4\n0 0\n0 2\n0 4\n2 0\n"));
        assert_eq!("0\n", run(solve, "3\n-1 -1\n1 0\n3 1\n"));
    }
}
