use crate::{graph::RootedTree, math::ModInt1000000007, problem::Judge};
use proconio::input;

type Mint = ModInt1000000007;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        parents: [usize; n - 1],
        colors: [u8; n],
    }

    judge.answer(count_splits(&parents, &colors));
}

/// 各成分に黒頂点がちょうど1つ含まれるような辺集合の選び方
fn count_splits(parents: &[usize], colors: &[u8]) -> Mint {
    let parents = std::iter::once(None)
        .chain(parents.iter().copied().map(Some))
        .collect::<Vec<_>>();
    let tree = RootedTree::from_parents(&parents);
    let children = tree.children();

    // dp[v] = (v の成分に黒なし, v の成分に黒1つ)
    let mut dp = vec![(Mint::zero(), Mint::zero()); colors.len()];

    for &v in tree.order.iter().rev() {
        let mut state = if colors[v] == 1 {
            (Mint::zero(), Mint::one())
        } else {
            (Mint::one(), Mint::zero())
        };

        for &c in children[v].iter() {
            let (c0, c1) = dp[c];
            let (d0, d1) = state;

            // c1 なら辺を切る or つなぐ、c0 ならつなぐしかない
            state = (d0 * (c0 + c1), d1 * (c0 + c1) + d0 * c1);
        }

        dp[v] = state;
    }

    dp[tree.root].1
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("2\n", run(solve, "3\n0 0\n0 1 1\n"));
        assert_eq!("1\n", run(solve, "6\n0 1 1 0 4\n1 1 0 0 1 0\n"));
        assert_eq!(
            "27\n",
            run(solve, "10\n0 1 2 1 4 4 4 0 8\n0 0 0 1 0 1 1 0 0 1\n")
        );
    }
}
