use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        x: u32,
    }

    match distinct_with_xor(n, x) {
        Some(set) => {
            judge.answer("YES");
            judge.answer_iter(set);
        }
        None => judge.answer("NO"),
    }
}

/// xor が x になる 10^6 以下の相異なる非負整数 n 個
fn distinct_with_xor(n: usize, x: u32) -> Option<Vec<u32>> {
    const A: u32 = 1 << 17;
    const B: u32 = 1 << 18;

    match n {
        1 => return Some(vec![x]),
        2 if x == 0 => return None,
        2 => return Some(vec![0, x]),
        _ => {}
    }

    let mut set = (1..=(n - 3) as u32).collect::<Vec<_>>();
    let rest = set.iter().fold(x, |acc, v| acc ^ v);

    // 残り3つは 2^17 以上を使えば既存の値と衝突しない
    if rest == 0 {
        set.extend([A, B, A ^ B]);
    } else {
        set.extend([0, A, A ^ rest]);
    }

    Some(set)
}
