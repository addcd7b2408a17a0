use crate::{graph::Graph, problem::Judge};
use proconio::{input, marker::Usize1};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topology {
    Bus,
    Ring,
    Star,
    Unknown,
}

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    let graph = Graph::from_edges(n, &edges);

    let name = match classify(&graph) {
        Topology::Bus => "bus topology",
        Topology::Ring => "ring topology",
        Topology::Star => "star topology",
        Topology::Unknown => "unknown topology",
    };

    judge.answer(name);
}

/// 連結グラフを次数の分布だけで分類する
fn classify(graph: &Graph) -> Topology {
    let n = graph.len();
    let mut counts = vec![0; n];

    for v in 0..n {
        counts[graph.degree(v)] += 1;
    }

    let m = graph.edge_count();

    if m == n && counts[2] == n {
        Topology::Ring
    } else if m + 1 == n && counts[1] == 2 && counts[2] == n - 2 {
        Topology::Bus
    } else if m + 1 == n && counts[n - 1] == 1 && counts[1] == n - 1 {
        Topology::Star
    } else {
        Topology::Unknown
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("bus topology\n", run(solve, "4 3\n1 2\n2 3\n3 4\n"));
        assert_eq!("ring topology\n", run(solve, "4 4\n1 2\n2 3\n3 4\n4 1\n"));
        assert_eq!("star topology\n", run(solve, "4 3\n1 2\n1 3\n1 4\n"));
        assert_eq!(
            "unknown topology\n",
            run(solve, "4 4\n1 2\n2 3\n3 1\n1 4\n")
        );
    }
}
