use crate::{graph::complement_components, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        edges: [(Usize1, Usize1); m],
    }

    // 重み0の辺 (補グラフ) の連結成分を重み1の辺でつなぐ
    let components = complement_components(n, &edges);
    judge.answer(components.len() - 1);
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "2\n",
            run(
                solve,
                "6 11\n1 3\n1 4\n1 5\n1 6\n2 3\n2 4\n2 5\n2 6\n3 4\n3 5\n3 6\n"
            )
        );
        assert_eq!("0\n", run(solve, "3 0\n"));
    }
}
