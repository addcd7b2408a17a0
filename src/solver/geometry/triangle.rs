use crate::{geometry::Point, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        a: i64,
        b: i64,
    }

    match place_triangle(a, b) {
        Some(vertices) => {
            judge.answer("YES");

            for p in vertices {
                judge.answer(p);
            }
        }
        None => judge.answer("NO"),
    }
}

/// 脚の長さ a, b の直角三角形を、どの辺も軸に平行にならないよう格子点に置く
fn place_triangle(a: i64, b: i64) -> Option<[Point; 3]> {
    for x in 1..a {
        let y = isqrt(a * a - x * x);

        if y == 0 || x * x + y * y != a * a {
            continue;
        }

        // (x, y) に直交する長さ b のベクトル
        if (b * x) % a != 0 || (b * y) % a != 0 {
            continue;
        }

        let u = Point::new(x, y);
        let v = Point::new(-y * b / a, x * b / a);
        let hypotenuse = u - v;

        if hypotenuse.x != 0 && hypotenuse.y != 0 {
            return Some([Point::new(0, 0), u, v]);
        }
    }

    None
}

fn isqrt(n: i64) -> i64 {
    let mut r = (n as f64).sqrt() as i64;

    while r * r > n {
        r -= 1;
    }

    while (r + 1) * (r + 1) <= n {
        r += 1;
    }

    r
}
