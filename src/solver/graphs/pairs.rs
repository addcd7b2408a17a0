use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        pairs: [(usize, usize); m],
    }

    judge.answer(if has_cover(n, &pairs) { "YES" } else { "NO" });
}

/// 全ての組が x か y を含むような x, y が存在するか
///
/// x は最初の組のどちらか。x を含まない組すべてに現れる y を探す
fn has_cover(n: usize, pairs: &[(usize, usize)]) -> bool {
    let (a, b) = pairs[0];

    [a, b].into_iter().any(|x| {
        let mut counts = vec![0; n + 1];
        let mut rest = 0;

        for &(u, v) in pairs.iter().filter(|&&(u, v)| u != x && v != x) {
            counts[u] += 1;
            counts[v] += 1;
            rest += 1;
        }

        counts.contains(&rest)
    })
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!(
            "NO\n",
            run(solve, "4 6\n1 2\n1 3\n1 4\n2 3\n2 4\n3 4\n")
        );
        assert_eq!("YES\n", run(solve, "5 4\n1 2\n2 3\n3 4\n4 5\n"));
        assert_eq!("YES\n", run(solve, "300000 5\n1 2\n1 2\n1 2\n1 2\n1 2\n"));
    }
}
