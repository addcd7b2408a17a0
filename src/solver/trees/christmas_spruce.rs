use crate::problem::Judge;
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        parents: [Usize1; n - 1],
    }

    judge.answer(if is_spruce(n, &parents) { "Yes" } else { "No" });
}

/// すべての非葉頂点が3つ以上の葉の子を持つか
fn is_spruce(n: usize, parents: &[usize]) -> bool {
    let mut child_count = vec![0; n];

    for &p in parents {
        child_count[p] += 1;
    }

    let mut leaf_children = vec![0; n];

    for (i, &p) in parents.iter().enumerate() {
        if child_count[i + 1] == 0 {
            leaf_children[p] += 1;
        }
    }

    (0..n).all(|v| child_count[v] == 0 || leaf_children[v] >= 3)
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("Yes\n", run(solve, "4\n1\n1\n1\n"));
        assert_eq!("No\n", run(solve, "7\n1\n1\n1\n2\n2\n2\n"));
        assert_eq!("Yes\n", run(solve, "8\n1\n1\n1\n1\n3\n3\n3\n"));
    }
}
