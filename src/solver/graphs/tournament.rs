use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        games: [(usize, usize); n * (n - 1) / 2 - 1],
    }

    let (winner, loser) = missing_game(n, &games);
    judge.answer(format!("{} {}", winner, loser));
}

/// 記録から漏れた試合 (勝者, 敗者)
///
/// 強さは全順序なので、勝ち数の多い方が勝つとすれば矛盾しない
fn missing_game(n: usize, games: &[(usize, usize)]) -> (usize, usize) {
    let mut played = vec![0; n + 1];
    let mut wins = vec![0; n + 1];

    for &(w, l) in games.iter() {
        played[w] += 1;
        played[l] += 1;
        wins[w] += 1;
    }

    let missing = (1..=n).filter(|&v| played[v] < n - 1).collect::<Vec<_>>();
    let (x, y) = (missing[0], missing[1]);

    if wins[x] >= wins[y] {
        (x, y)
    } else {
        (y, x)
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("4 3\n", run(solve, "4\n4 2\n4 1\n2 3\n2 1\n3 1\n"));
    }

    #[test]
    fn weaker_player_listed_first() {
        // 1 > 2 > 3 で 1 と 3 の試合が抜けている
        assert_eq!("1 3\n", run(solve, "3\n1 2\n2 3\n"));
    }
}
