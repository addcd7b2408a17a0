use crate::{geometry::Point, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        a: (i64, i64),
        b: (i64, i64),
        c: (i64, i64),
    }

    let [a, b, c] = [a, b, c].map(|(x, y)| Point::new(x, y));

    // 残りの1点は、どの点を対角に置くかで3通り
    let candidates = [a + b - c, a + c - b, b + c - a];

    judge.answer(candidates.len());

    for p in candidates {
        judge.answer(p);
    }
}
