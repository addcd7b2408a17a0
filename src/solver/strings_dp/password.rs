use crate::problem::Judge;
use proconio::{input, marker::Bytes};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        s: Bytes,
    }

    match password(&s) {
        Some(t) => judge.answer(String::from_utf8_lossy(t)),
        None => judge.answer("Just a legend"),
    }
}

/// 接頭辞かつ接尾辞で、さらに内部にも現れる最長の部分文字列
fn password(s: &[u8]) -> Option<&[u8]> {
    let pi = prefix_function(s);
    let n = s.len();
    let border = *pi.last()?;

    if border == 0 {
        return None;
    }

    if pi[..n - 1].contains(&border) {
        return Some(&s[..border]);
    }

    // 最長borderのborderは必ず内部に現れる
    match pi[border - 1] {
        0 => None,
        shorter => Some(&s[..shorter]),
    }
}

/// pi[i]: s[..=i] の真の接頭辞かつ接尾辞である最長の長さ
fn prefix_function(s: &[u8]) -> Vec<usize> {
    let mut pi = vec![0; s.len()];

    for i in 1..s.len() {
        let mut k = pi[i - 1];

        while k > 0 && s[i] != s[k] {
            k = pi[k - 1];
        }

        if s[i] == s[k] {
            k += 1;
        }

        pi[i] = k;
    }

    pi
}
