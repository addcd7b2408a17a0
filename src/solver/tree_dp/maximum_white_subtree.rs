use crate::{
    graph::{reroot, Graph, Rerooting},
    problem::Judge,
};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        colors: [u8; n],
        edges: [(Usize1, Usize1); n - 1],
    }

    let graph = Graph::from_edges(n, &edges);
    let best = reroot(&graph, &WhiteBalance { colors: &colors });

    judge.answer_iter(best);
}

/// 頂点を含む連結部分グラフの (白 - 黒) の最大値
struct WhiteBalance<'a> {
    colors: &'a [u8],
}

impl Rerooting for WhiteBalance<'_> {
    type Value = i64;

    fn identity(&self) -> Self::Value {
        0
    }

    fn merge(&self, x: &Self::Value, y: &Self::Value) -> Self::Value {
        x + y
    }

    fn put_edge(&self, x: &Self::Value) -> Self::Value {
        // 損をする子の部分木は含めない
        (*x).max(0)
    }

    fn put_vertex(&self, x: &Self::Value, v: usize) -> Self::Value {
        if self.colors[v] == 1 {
            x + 1
        } else {
            x - 1
        }
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "2 2 2 2 2 1 1 0 2\n",
            run(
                solve,
                "9\n0 1 1 1 0 0 0 0 1\n1 2\n1 3\n3 4\n3 5\n2 6\n4 7\n6 8\n5 9\n"
            )
        );
        assert_eq!("0 -1 1 -1\n", run(solve, "4\n0 0 1 0\n1 2\n1 3\n1 4\n"));
    }
}
