use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1, Usize1); m],
        q: usize,
        queries: [(Usize1, Usize1); q],
    }

    // 色ごとに独立したUnion-Find
    let mut colors = (0..m).map(|_| UnionFind::new(n)).collect::<Vec<_>>();

    for &(u, v, c) in edges.iter() {
        colors[c].unite(u, v);
    }

    for (u, v) in queries {
        judge.answer(connected_colors(&mut colors, u, v));
    }
}

fn connected_colors(colors: &mut [UnionFind], u: usize, v: usize) -> usize {
    colors
        .iter_mut()
        .map(|uf| uf.same(u, v))
        .filter(|&same| same)
        .count()
}

#[cfg(test)]
mod test {
    use super::{connected_colors, solve};
    use crate::data_structures::UnionFind;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "2\n1\n0\n",
            run(
                solve,
                "4 5\n1 2 1\n1 2 2\n2 3 1\n2 3 3\n2 4 3\n3\n1 2\n3 4\n1 4\n"
            )
        );
        assert_eq!(
            "1\n1\n1\n1\n2\n",
            run(
                solve,
                "5 7\n1 5 1\n2 5 1\n3 5 1\n4 5 1\n1 2 2\n2 3 2\n3 4 2\n5\n1 5\n5 1\n2 5\n1 5\n1 4\n"
            )
        );
    }

    #[test]
    fn count_colors_connecting_pair() {
        let mut colors = (0..3).map(|_| UnionFind::new(4)).collect::<Vec<_>>();
        colors[0].unite(0, 1);
        colors[0].unite(1, 2);
        colors[2].unite(0, 2);

        assert_eq!(2, connected_colors(&mut colors, 0, 2));
        assert_eq!(1, connected_colors(&mut colors, 1, 2));
        assert_eq!(0, connected_colors(&mut colors, 0, 3));
    }
}
