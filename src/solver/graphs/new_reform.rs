use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    let mut uf = UnionFind::new(n);
    let mut has_cycle = vec![false; n];

    for &(u, v) in edges.iter() {
        let (ru, rv) = (uf.find(u), uf.find(v));
        let merged_cycle = has_cycle[ru] || has_cycle[rv] || ru == rv;
        uf.unite(u, v);

        let root = uf.find(u);
        has_cycle[root] = merged_cycle;
    }

    // 閉路を含まない成分 (木) ごとに1都市が孤立する
    let separated = (0..n)
        .filter(|&v| uf.find(v) == v && !has_cycle[v])
        .count();

    judge.answer(separated);
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("1\n", run(solve, "4 3\n2 1\n1 3\n4 3\n"));
        assert_eq!("0\n", run(solve, "5 5\n2 1\n1 3\n2 3\n2 5\n4 3\n"));
        assert_eq!("1\n", run(solve, "6 5\n1 2\n2 3\n4 5\n4 6\n5 6\n"));
    }

    #[test]
    fn isolated_vertices() {
        assert_eq!("3\n", run(solve, "3 0\n"));
    }
}
