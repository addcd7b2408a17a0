use crate::{math::ModInt998244353, problem::Judge};
use proconio::input;
use std::collections::BTreeSet;

type Mint = ModInt998244353;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        q: usize,
        p: [u32; n],
        queries: [usize; q],
    }

    let mut days = CheckpointDays::new(&p);

    for u in queries {
        judge.answer(days.toggle(u));
    }
}

/// チェックポイント集合を保ちながら、全区間の期待日数の和を管理する
struct CheckpointDays {
    /// prefix[i] = p_1 … p_i
    prefix: Vec<Mint>,
    /// prefix_sum[i] = prefix[0] + … + prefix[i - 1]
    prefix_sum: Vec<Mint>,
    /// 番兵として 1 と n + 1 を含む
    checkpoints: BTreeSet<usize>,
    total: Mint,
}

impl CheckpointDays {
    fn new(p: &[u32]) -> Self {
        let n = p.len();
        let percent = Mint::new(100).inv();
        let mut prefix = vec![Mint::one(); n + 1];
        let mut prefix_sum = vec![Mint::zero(); n + 1];

        for i in 1..=n {
            prefix[i] = prefix[i - 1] * Mint::from(p[i - 1]) * percent;
            prefix_sum[i] = prefix_sum[i - 1] + prefix[i - 1];
        }

        let mut days = Self {
            prefix,
            prefix_sum,
            checkpoints: BTreeSet::from([1, n + 1]),
            total: Mint::zero(),
        };

        days.total = days.segment(1, n + 1);
        days
    }

    /// 鏡 l から鏡 r - 1 まで連続で成功するまでの期待日数
    fn segment(&self, l: usize, r: usize) -> Mint {
        (self.prefix_sum[r - 1] - self.prefix_sum[l - 1]) / self.prefix[r - 1]
    }

    fn toggle(&mut self, u: usize) -> Mint {
        let prev = self.checkpoints.range(..u).next_back().copied();
        let next = self.checkpoints.range(u + 1..).next().copied();

        if let (Some(a), Some(b)) = (prev, next) {
            let split = self.segment(a, u) + self.segment(u, b);
            let joined = self.segment(a, b);

            if self.checkpoints.remove(&u) {
                self.total += joined - split;
            } else {
                self.checkpoints.insert(u);
                self.total += split - joined;
            }
        }

        self.total
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("4\n6\n", run(solve, "2 2\n50 50\n2\n2\n"));
        assert_eq!(
            "117\n665496274\n332748143\n831870317\n499122211\n",
            run(solve, "5 5\n10 20 30 40 50\n2\n3\n4\n5\n3\n")
        );
    }
}
