use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    judge.answer(if is_reasonable(n, &edges) { "YES" } else { "NO" });
}

/// 各連結成分が完全グラフになっているか
fn is_reasonable(n: usize, edges: &[(usize, usize)]) -> bool {
    let mut uf = UnionFind::new(n);

    for &(u, v) in edges {
        uf.unite(u, v);
    }

    let mut edge_count = vec![0usize; n];

    for &(u, _) in edges {
        let root = uf.find(u);
        edge_count[root] += 1;
    }

    (0..n).all(|v| {
        if uf.find(v) != v {
            return true;
        }

        let size = uf.size(v);
        edge_count[v] == size * (size - 1) / 2
    })
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("YES\n", run(solve, "4 3\n1 3\n3 4\n1 4\n"));
        assert_eq!("NO\n", run(solve, "4 4\n3 1\n2 3\n3 4\n1 2\n"));
        assert_eq!("YES\n", run(solve, "10 4\n4 3\n5 10\n8 9\n1 2\n"));
        assert_eq!("NO\n", run(solve, "3 2\n1 2\n2 3\n"));
    }
}
