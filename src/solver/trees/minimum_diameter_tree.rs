use crate::problem::Judge;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        s: u32,
        edges: [(Usize1, Usize1); n - 1],
    }

    let mut degree = vec![0; n];

    for &(u, v) in edges.iter() {
        degree[u] += 1;
        degree[v] += 1;
    }

    // 重みは葉に接する辺へ均等に配るのが最適
    let leaves = degree.iter().filter(|&&d| d == 1).count();
    let diameter = 2.0 * s as f64 / leaves as f64;

    judge.answer_float(diameter, 10);
}
