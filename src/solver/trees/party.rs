use crate::{graph::RootedTree, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        managers: [i64; n],
    }

    // 森の最大深さ = 必要なグループ数。仮想根 n の下に各根を吊るす
    let parents = managers
        .iter()
        .map(|&p| Some(if p < 0 { n } else { p as usize - 1 }))
        .chain(std::iter::once(None))
        .collect::<Vec<_>>();

    let tree = RootedTree::from_parents(&parents);
    let groups = tree.depth.iter().copied().max().unwrap_or(0);

    judge.answer(groups);
}
