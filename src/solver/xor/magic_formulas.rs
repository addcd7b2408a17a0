use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        p: [u32; n],
    }

    judge.answer(magic_formula(&p));
}

/// xor_i (p_i xor xor_j (i mod j))
fn magic_formula(p: &[u32]) -> u32 {
    let n = p.len();

    // prefix[k] = 0 xor 1 xor ... xor k
    let mut prefix = vec![0; n + 1];

    for k in 1..=n {
        prefix[k] = prefix[k - 1] ^ k as u32;
    }

    let mut result = p.iter().fold(0, |acc, &v| acc ^ v);

    for j in 1..=n {
        // i mod j は 0..j を n / j 周してから 0..=n % j
        if (n / j) % 2 == 1 {
            result ^= prefix[j - 1];
        }

        result ^= prefix[n % j];
    }

    result
}
