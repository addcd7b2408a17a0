use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        u: u64,
        v: u64,
    }

    match shortest_array(u, v) {
        Some(array) => {
            judge.answer(array.len());

            if !array.is_empty() {
                judge.answer_iter(array);
            }
        }
        None => judge.answer(-1),
    }
}

/// xor が u、和が v になる最短の正整数列
fn shortest_array(u: u64, v: u64) -> Option<Vec<u64>> {
    // 和と xor の差は繰り上がり分なので偶数で非負
    if u > v || (v - u) % 2 == 1 {
        return None;
    }

    if u == v {
        return Some(if u == 0 { vec![] } else { vec![u] });
    }

    let half = (v - u) / 2;

    if u & half == 0 {
        Some(vec![u + half, half])
    } else {
        Some(vec![u, half, half])
    }
}
