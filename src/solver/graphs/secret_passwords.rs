use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Bytes};

const ALPHABET: usize = 26;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        passwords: [Bytes; n],
    }

    judge.answer(equivalence_classes(&passwords));
}

/// 共通の文字を持つパスワードは同値。文字を頂点として連結成分を数える
fn equivalence_classes(passwords: &[Vec<u8>]) -> usize {
    let mut uf = UnionFind::new(ALPHABET);
    let mut used = [false; ALPHABET];

    for password in passwords.iter() {
        let first = (password[0] - b'a') as usize;

        for &c in password.iter() {
            let c = (c - b'a') as usize;
            used[c] = true;
            uf.unite(first, c);
        }
    }

    (0..ALPHABET)
        .filter(|&c| used[c] && uf.find(c) == c)
        .count()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("2\n", run(solve, "4\na\nb\nab\nd\n"));
        assert_eq!("1\n", run(solve, "3\nab\nbc\nabc\n"));
        assert_eq!("1\n", run(solve, "1\ncodeforces\n"));
    }
}
