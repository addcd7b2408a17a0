use crate::{
    graph::{Graph, RootedTree},
    problem::Judge,
};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
    }

    for _ in 0..t {
        input! {
            from judge.source(),
            n: usize,
            ranges: [(i64, i64); n],
            edges: [(Usize1, Usize1); n - 1],
        }

        judge.answer(max_beauty(&ranges, &edges));
    }
}

/// 各頂点の値は区間の端点のどちらかに寄せれば十分
fn max_beauty(ranges: &[(i64, i64)], edges: &[(usize, usize)]) -> i64 {
    let graph = Graph::from_edges(ranges.len(), edges);
    let tree = RootedTree::new(&graph, 0);
    let mut dp = vec![[0i64; 2]; ranges.len()];

    for &v in tree.order.iter().rev() {
        let ends = [ranges[v].0, ranges[v].1];

        for u in graph.neighbors(v) {
            if Some(u) == tree.parent[v] {
                continue;
            }

            let child_ends = [ranges[u].0, ranges[u].1];

            for (i, &x) in ends.iter().enumerate() {
                let gain = (0..2)
                    .map(|j| dp[u][j] + (x - child_ends[j]).abs())
                    .max()
                    .unwrap_or(0);
                dp[v][i] += gain;
            }
        }
    }

    dp[tree.root][0].max(dp[tree.root][1])
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        let input = "3
2
1 6
3 8
1 2
3
1 3
4 6
7 9
1 2
2 3
6
3 14
12 20
12 19
2 12
10 17
3 17
3 2
6 5
1 5
2 6
4 6
";
        assert_eq!("7\n8\n62\n", run(solve, input));
    }
}
