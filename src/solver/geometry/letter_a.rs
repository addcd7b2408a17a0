use crate::{geometry::Point, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
    }

    for _ in 0..t {
        input! {
            from judge.source(),
            segments: [(i64, i64, i64, i64); 3],
        }

        let segments = segments
            .into_iter()
            .map(|(x1, y1, x2, y2)| (Point::new(x1, y1), Point::new(x2, y2)))
            .collect::<Vec<_>>();

        judge.answer(if is_letter_a(&segments) { "YES" } else { "NO" });
    }
}

fn is_letter_a(segments: &[(Point, Point)]) -> bool {
    for (i, j, k) in [(0, 1, 2), (0, 2, 1), (1, 2, 0)] {
        for (a, b) in orientations(segments[i]) {
            for (c, d) in orientations(segments[j]) {
                if a != c {
                    continue;
                }

                let (p, q) = segments[k];

                if is_letter_a_with(a, b - a, d - a, p, q)
                    || is_letter_a_with(a, b - a, d - a, q, p)
                {
                    return true;
                }
            }
        }
    }

    false
}

fn orientations((a, b): (Point, Point)) -> [(Point, Point); 2] {
    [(a, b), (b, a)]
}

/// 共通端点 `apex` から伸びる2辺 `u`, `v` と、それぞれの辺上の点 `p`, `q` を結ぶ横棒
fn is_letter_a_with(apex: Point, u: Point, v: Point, p: Point, q: Point) -> bool {
    // 2辺のなす角は0度より大きく90度以下
    if u.cross(v) == 0 || u.dot(v) < 0 {
        return false;
    }

    divides_well(u, p - apex) && divides_well(v, q - apex)
}

/// 点 `w` が辺 `u` 上にあり、辺を 1:4 より偏らない比で分ける
fn divides_well(u: Point, w: Point) -> bool {
    if u.cross(w) != 0 {
        return false;
    }

    // 射影の比 t = (u・w) / |u|^2 が [1/5, 4/5] に入る
    let dot = u.dot(w) * 5;
    let norm2 = u.norm2();
    norm2 <= dot && dot <= norm2 * 4
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "YES\nNO\nYES\n",
            run(
                solve,
                "3\n4 4 6 0\n4 1 5 2\n4 0 4 4\n0 0 0 6\n0 6 2 -4\n1 1 0 1\n0 0 0 5\n0 5 2 -1\n1 2 0 1\n"
            )
        );
    }

    #[test]
    fn crossbar_too_close_to_apex() {
        // 横棒の端点が辺を 1:9 に分ける
        assert_eq!("NO\n", run(solve, "1\n0 0 0 10\n0 0 10 0\n0 1 1 0\n"));
        assert_eq!("YES\n", run(solve, "1\n0 0 0 10\n0 0 10 0\n0 2 2 0\n"));
    }
}
