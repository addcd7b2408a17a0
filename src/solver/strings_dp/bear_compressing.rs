use crate::problem::Judge;
use proconio::{input, marker::Bytes};

const LETTERS: usize = 6;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        q: usize,
        operations: [(Bytes, Bytes); q],
    }

    let operations = operations
        .iter()
        .map(|(from, to)| ((from[0] - b'a') as usize, (to[0] - b'a') as usize))
        .collect::<Vec<_>>();

    judge.answer(compressible(n, &operations));
}

/// 先頭2文字の置換を繰り返して "a" になる長さ n の文字列の数
///
/// operations[i] = (置換前の先頭文字, 置換後の文字)
fn compressible(n: usize, operations: &[(usize, usize)]) -> u64 {
    // count[c]: 先頭が c で "a" に縮む文字列の数
    let mut count = [0u64; LETTERS];
    count[0] = 1;

    for _ in 1..n {
        let mut next = [0u64; LETTERS];

        for &(first, to) in operations {
            next[first] += count[to];
        }

        count = next;
    }

    count.iter().sum()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("4\n", run(solve, "3 5\nab a\ncc c\nca a\nee c\nff d\n"));
        assert_eq!("0\n", run(solve, "6 2\nbb a\nba a\n"));
    }

    #[test]
    fn length_two() {
        assert_eq!("2\n", run(solve, "2 3\nab a\nca a\ncc c\n"));
    }
}
