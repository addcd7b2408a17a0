use crate::{
    graph::{reroot, Graph, Rerooting},
    problem::Judge,
};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        edges: [(Usize1, Usize1); n - 1],
    }

    // 最初に塗る頂点を根とすると、得点は全頂点の部分木サイズの和
    let graph = Graph::from_edges(n, &edges);
    let best = reroot(&graph, &SubtreeSizeSum)
        .into_iter()
        .map(|(_, total)| total)
        .max()
        .unwrap_or(0);

    judge.answer(best);
}

struct SubtreeSizeSum;

impl Rerooting for SubtreeSizeSum {
    /// (部分木サイズ, 部分木内の部分木サイズの和)
    type Value = (u64, u64);

    fn identity(&self) -> Self::Value {
        (0, 0)
    }

    fn merge(&self, x: &Self::Value, y: &Self::Value) -> Self::Value {
        (x.0 + y.0, x.1 + y.1)
    }

    fn put_edge(&self, x: &Self::Value) -> Self::Value {
        *x
    }

    fn put_vertex(&self, &(size, total): &Self::Value, _v: usize) -> Self::Value {
        (size + 1, total + size + 1)
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "36\n",
            run(solve, "9\n1 2\n2 3\n2 5\n2 6\n1 4\n4 9\n9 7\n9 8\n")
        );
        assert_eq!("14\n", run(solve, "5\n1 2\n1 3\n2 4\n2 5\n"));
    }
}
