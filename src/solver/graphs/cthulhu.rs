use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    // 連結かつ辺数 = 頂点数 なら、ちょうど1つの閉路に木がぶら下がった形
    let mut uf = UnionFind::new(n);

    for &(u, v) in edges.iter() {
        uf.unite(u, v);
    }

    let is_cthulhu = n == m && uf.group_count() == 1;
    judge.answer(if is_cthulhu { "FHTAGN!" } else { "NO" });
}
