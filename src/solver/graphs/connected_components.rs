use crate::{graph::complement_components, problem::Judge};
use itertools::Itertools;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    // 入力は「存在しない辺」の一覧なので、補グラフの連結成分がそのまま答え
    let sizes = complement_components(n, &edges)
        .iter()
        .map(|c| c.len())
        .sorted()
        .collect_vec();

    judge.answer(sizes.len());
    judge.answer_iter(sizes);
}
