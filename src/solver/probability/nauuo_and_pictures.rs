use crate::{math::ModInt998244353, problem::Judge};
use proconio::input;

type Mint = ModInt998244353;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        liked: [u8; n],
        w: [u64; n],
    }

    let liked = liked.into_iter().map(|a| a == 1).collect::<Vec<_>>();
    for weight in expected_weights(&liked, &w, m) {
        judge.answer(weight);
    }
}

/// m 回の訪問後の各画像の重みの期待値
///
/// 好きな画像の重みの合計 like と嫌いな画像の合計 dislike だけを状態に持つ。
/// 同じ側の画像どうしでは、最終的な期待値は初期の重みに比例する
fn expected_weights(liked: &[bool], w: &[u64], m: usize) -> Vec<Mint> {
    let like = liked
        .iter()
        .zip(w.iter())
        .filter(|&(&l, _)| l)
        .map(|(_, &x)| x)
        .sum::<u64>();
    let dislike = w.iter().sum::<u64>() - like;

    // dp[i]: 好きな側が i 回、嫌いな側が step - i 回選ばれた確率
    let mut dp = vec![Mint::one()];

    for step in 0..m {
        let mut next = vec![Mint::zero(); step + 2];

        for (i, &q) in dp.iter().enumerate() {
            let j = (step - i) as u64;

            if q == Mint::zero() || j > dislike {
                continue;
            }

            let total = like + i as u64 + dislike - j;
            let inv = Mint::new(total).inv();
            next[i + 1] += q * Mint::new(like + i as u64) * inv;
            next[i] += q * Mint::new(dislike - j) * inv;
        }

        dp = next;
    }

    let mut final_like = Mint::zero();
    let mut final_dislike = Mint::zero();

    for (i, &q) in dp.iter().enumerate() {
        let j = (m - i) as u64;

        if j <= dislike {
            final_like += q * Mint::new(like + i as u64);
            final_dislike += q * Mint::new(dislike - j);
        }
    }

    let like_ratio = final_like / Mint::new(like);
    let dislike_ratio = if dislike == 0 {
        Mint::zero()
    } else {
        final_dislike / Mint::new(dislike)
    };

    liked
        .iter()
        .zip(w.iter())
        .map(|(&l, &x)| Mint::new(x) * if l { like_ratio } else { dislike_ratio })
        .collect()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("332748119\n332748119\n", run(solve, "2 1\n0 1\n2 1\n"));
        assert_eq!("3\n", run(solve, "1 2\n1\n1\n"));
        assert_eq!(
            "160955686\n185138929\n974061117\n",
            run(solve, "3 3\n0 1 1\n4 3 5\n")
        );
    }
}
