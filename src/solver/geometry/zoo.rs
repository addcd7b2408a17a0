use crate::{geometry::Point, problem::Judge};
use proconio::input;
use rustc_hash::FxHashMap;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        flamingos: [(i64, i64); m],
    }

    let flamingos = flamingos
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();

    judge.answer(total_visible(n, &flamingos));
}

/// 双眼鏡 (i, 0) ごとに、1本の直線上に見えるフラミンゴの最大数を合計する
fn total_visible(n: usize, flamingos: &[Point]) -> u64 {
    // どの双眼鏡も少なくとも1羽は見える
    let mut best = vec![1u64; n + 1];

    for &p in flamingos.iter() {
        let mut directions = FxHashMap::default();

        for &q in flamingos.iter().filter(|&&q| q != p) {
            *directions
                .entry((q - p).normalized_direction())
                .or_insert(0u64) += 1;
        }

        for (d, count) in directions {
            // x軸に平行な直線は双眼鏡を通らない
            if d.y == 0 {
                continue;
            }

            // p + t d が y = 0 となる x 座標
            let numerator = p.x * d.y - p.y * d.x;

            if numerator % d.y != 0 {
                continue;
            }

            let x = numerator / d.y;

            if 1 <= x && x <= n as i64 {
                let x = x as usize;
                best[x] = best[x].max(count + 1);
            }
        }
    }

    best[1..].iter().sum()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("11\n", run(solve, "5 5\n2 1\n4 1\n3 2\n4 3\n4 4\n"));
    }

    #[test]
    fn single_flamingo() {
        assert_eq!("3\n", run(solve, "3 1\n100 100\n"));
    }
}
