use crate::{math::divisors, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        queries: [(u64, u64); t],
    }

    for (n, k) in queries {
        // k 以下で最大の約数のパッケージを選ぶ
        let size = divisors(n)
            .into_iter()
            .filter(|&d| d <= k)
            .max()
            .unwrap_or(1);

        judge.answer(n / size);
    }
}
