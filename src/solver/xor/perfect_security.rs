use crate::{data_structures::BinaryTrie, problem::Judge};
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        encrypted: [u32; n],
        keys: [u32; n],
    }

    judge.answer_iter(decrypt(&encrypted, &keys));
}

/// 辞書順最小の復号文。先頭から順に、残っている鍵とのxorが最小になるものを使う
fn decrypt(encrypted: &[u32], keys: &[u32]) -> Vec<u32> {
    let mut trie = BinaryTrie::new();

    for &k in keys {
        trie.insert(k);
    }

    let mut message = Vec::with_capacity(encrypted.len());

    for &a in encrypted {
        let Some(key) = trie.min_xor(a) else {
            break;
        };

        trie.remove(key);
        message.push(a ^ key);
    }

    message
}
