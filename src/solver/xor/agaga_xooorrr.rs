use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
    }

    for _ in 0..t {
        input! {
            from judge.source(),
            n: usize,
            a: [u32; n],
        }

        judge.answer(if can_equalize(&a) { "YES" } else { "NO" });
    }
}

/// 隣接2要素をxorで1つにまとめる操作で、2要素以上が同じ値で残せるか
fn can_equalize(a: &[u32]) -> bool {
    let total = a.iter().fold(0, |acc, x| acc ^ x);

    if total == 0 {
        return true;
    }

    // 全体が total で、各区間も total なら区間数は奇数。3区間以上取れればよい
    let mut segments = 0;
    let mut current = 0;

    for &x in a {
        current ^= x;

        if current == total {
            segments += 1;
            current = 0;
        }
    }

    segments >= 3
}
