use crate::{common::ChangeMinMax, graph::WeightedGraph, problem::Judge};
use proconio::{input, marker::Usize1};
use std::collections::VecDeque;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        gas: [i64; n],
        roads: [(Usize1, Usize1, i64); n - 1],
    }

    let mut graph = WeightedGraph::new(n);

    for &(u, v, c) in roads.iter() {
        graph.add_edge(u, v, c);
    }

    judge.answer(max_remaining(&graph, &gas));
}

/// パス上の給油量の和 - 道の長さの和 の最大値
fn max_remaining(graph: &WeightedGraph, gas: &[i64]) -> i64 {
    let n = graph.len();
    let mut order = Vec::with_capacity(n);
    let mut parent = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;

    while let Some(v) = queue.pop_front() {
        order.push(v);

        for e in graph.edges(v) {
            if !visited[e.to] {
                visited[e.to] = true;
                parent[e.to] = Some(v);
                queue.push_back(e.to);
            }
        }
    }

    // down[v]: v から部分木へ降りるパスの最大値
    let mut down = vec![0; n];
    let mut best = i64::MIN;

    for &v in order.iter().rev() {
        let mut first = 0;
        let mut second = 0;

        for e in graph.edges(v) {
            if Some(e.to) == parent[v] {
                continue;
            }

            let value = down[e.to] - e.weight;

            if value > first {
                second = first;
                first = value;
            } else {
                second.change_max(value);
            }
        }

        down[v] = gas[v] + first;
        best.change_max(gas[v] + first + second);
    }

    best
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("3\n", run(solve, "3\n1 3 3\n1 2 2\n1 3 2\n"));
        assert_eq!(
            "7\n",
            run(solve, "5\n6 3 2 5 0\n1 2 10\n2 3 3\n2 4 1\n1 5 1\n")
        );
    }

    #[test]
    fn single_city() {
        assert_eq!("4\n", run(solve, "1\n4\n"));
    }
}
