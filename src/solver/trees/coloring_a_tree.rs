use crate::problem::Judge;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        parents: [Usize1; n - 1],
        colors: [u32; n],
    }

    // 根の塗装 + 親と色が異なる頂点ごとに1回
    let steps = 1 + parents
        .iter()
        .enumerate()
        .filter(|&(i, &p)| colors[i + 1] != colors[p])
        .count();

    judge.answer(steps);
}
