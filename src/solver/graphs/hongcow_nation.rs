use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        k: usize,
        governments: [Usize1; k],
        edges: [(Usize1, Usize1); m],
    }

    judge.answer(max_new_roads(n, &governments, &edges));
}

/// 政府のある成分どうしを繋がずに追加できる辺の最大数
///
/// 政府のない頂点は全て最大の政府成分にまとめ、各成分を完全グラフにする
fn max_new_roads(n: usize, governments: &[usize], edges: &[(usize, usize)]) -> usize {
    let mut uf = UnionFind::new(n);

    for &(u, v) in edges {
        uf.unite(u, v);
    }

    let sizes = governments.iter().map(|&g| uf.size(g)).collect::<Vec<_>>();
    let free = n - sizes.iter().sum::<usize>();
    let largest = sizes.iter().copied().max().unwrap_or(0);
    let complete = |s: usize| s * s.saturating_sub(1) / 2;

    let total = sizes.iter().map(|&s| complete(s)).sum::<usize>() - complete(largest)
        + complete(largest + free);

    total - edges.len()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("2\n", run(solve, "4 1 2\n1 3\n1 2\n"));
        assert_eq!("0\n", run(solve, "3 3 1\n2\n1 2\n1 3\n2 3\n"));
    }
}
