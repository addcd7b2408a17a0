use crate::{data_structures::BinaryTrie, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        q: usize,
    }

    let mut warriors = BinaryTrie::new();

    for _ in 0..q {
        input! {
            from judge.source(),
            kind: u8,
            p: u32,
        }

        match kind {
            1 => warriors.insert(p),
            2 => {
                warriors.remove(p);
            }
            _ => {
                input! {
                    from judge.source(),
                    l: u32,
                }

                // p_i xor p < l の戦士は指揮官を尊敬する
                judge.answer(warriors.count_xor_less(p, l));
            }
        }
    }
}
