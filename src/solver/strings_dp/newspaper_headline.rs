use crate::problem::Judge;
use proconio::{input, marker::Bytes};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        s1: Bytes,
        s2: Bytes,
    }

    match headlines_needed(&s1, &s2) {
        Some(count) => judge.answer(count),
        None => judge.answer(-1),
    }
}

/// s1 を何枚つなげれば s2 が部分列として現れるか
fn headlines_needed(s1: &[u8], s2: &[u8]) -> Option<usize> {
    let n = s1.len();

    // next[i][c]: 位置 i 以降で最初に文字 c が現れる位置
    let mut next = vec![[None; 26]; n + 1];

    for i in (0..n).rev() {
        next[i] = next[i + 1];
        next[i][(s1[i] - b'a') as usize] = Some(i);
    }

    let mut count = 1;
    let mut pos = 0;

    for &ch in s2 {
        let c = (ch - b'a') as usize;

        pos = match next[pos][c] {
            Some(p) => p + 1,
            None => {
                count += 1;
                next[0][c]? + 1
            }
        };
    }

    Some(count)
}
