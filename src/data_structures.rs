use std::ops::{AddAssign, Sub};

/// [0, n) の整数の集合を管理する定数倍が軽いデータ構造
///
/// https://topcoder-tomerun.hatenablog.jp/entry/2021/06/12/134643
#[derive(Debug, Clone)]
pub struct IndexSet {
    values: Vec<usize>,
    positions: Vec<Option<usize>>,
}

#[allow(dead_code)]
impl IndexSet {
    pub fn new(n: usize) -> Self {
        Self {
            values: vec![],
            positions: vec![None; n],
        }
    }

    /// [0, n) をすべて含む集合
    pub fn full(n: usize) -> Self {
        Self {
            values: (0..n).collect(),
            positions: (0..n).map(Some).collect(),
        }
    }

    pub fn add(&mut self, value: usize) {
        let pos = &mut self.positions[value];

        if pos.is_none() {
            *pos = Some(self.values.len());
            self.values.push(value);
        }
    }

    pub fn remove(&mut self, value: usize) {
        if let Some(index) = self.positions[value] {
            let last = self.values[self.values.len() - 1];
            self.values[index] = last;
            self.values.pop();
            self.positions[last] = Some(index);
            self.positions[value] = None;
        }
    }

    pub fn pop(&mut self) -> Option<usize> {
        let value = *self.values.last()?;
        self.remove(value);
        Some(value)
    }

    pub fn contains(&self, value: usize) -> bool {
        self.positions[value].is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }
}

#[derive(Debug, Clone)]
pub struct UnionFind {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    group_count: usize,
}

#[allow(dead_code)]
impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            sizes: vec![1; n],
            group_count: n,
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;

        while self.parents[root] != root {
            root = self.parents[root];
        }

        // 経路圧縮
        let mut x = x;

        while self.parents[x] != root {
            let next = self.parents[x];
            self.parents[x] = root;
            x = next;
        }

        root
    }

    /// 併合した場合はtrueを返す
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let mut x = self.find(x);
        let mut y = self.find(y);

        if x == y {
            return false;
        }

        if self.sizes[x] < self.sizes[y] {
            std::mem::swap(&mut x, &mut y);
        }

        self.parents[y] = x;
        self.sizes[x] += self.sizes[y];
        self.group_count -= 1;
        true
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.sizes[root]
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }
}

/// 0-indexedのBinary Indexed Tree
#[derive(Debug, Clone)]
pub struct FenwickTree<T> {
    data: Vec<T>,
}

#[allow(dead_code)]
impl<T: Copy + Default + AddAssign + Sub<Output = T>> FenwickTree<T> {
    pub fn new(n: usize) -> Self {
        Self {
            data: vec![T::default(); n + 1],
        }
    }

    pub fn add(&mut self, index: usize, value: T) {
        let mut i = index + 1;

        while i < self.data.len() {
            self.data[i] += value;
            i += i & i.wrapping_neg();
        }
    }

    /// [0, end) の和
    pub fn prefix_sum(&self, end: usize) -> T {
        let mut sum = T::default();
        let mut i = end;

        while i > 0 {
            sum += self.data[i];
            i -= i & i.wrapping_neg();
        }

        sum
    }

    /// [begin, end) の和
    pub fn sum(&self, begin: usize, end: usize) -> T {
        self.prefix_sum(end) - self.prefix_sum(begin)
    }
}

/// u32の多重集合を上位bitから管理するトライ木
#[derive(Debug, Clone)]
pub struct BinaryTrie {
    children: Vec<[u32; 2]>,
    counts: Vec<u32>,
}

#[allow(dead_code)]
impl BinaryTrie {
    const BITS: u32 = 30;
    const NONE: u32 = u32::MAX;

    pub fn new() -> Self {
        Self {
            children: vec![[Self::NONE; 2]],
            counts: vec![0],
        }
    }

    pub fn len(&self) -> usize {
        self.counts[0] as usize
    }

    pub fn is_empty(&self) -> bool {
        self.counts[0] == 0
    }

    pub fn insert(&mut self, value: u32) {
        let mut node = 0;
        self.counts[node] += 1;

        for bit in (0..Self::BITS).rev() {
            let b = ((value >> bit) & 1) as usize;

            if self.children[node][b] == Self::NONE {
                self.children[node][b] = self.children.len() as u32;
                self.children.push([Self::NONE; 2]);
                self.counts.push(0);
            }

            node = self.children[node][b] as usize;
            self.counts[node] += 1;
        }
    }

    /// 含まれていなければfalseを返して何もしない
    pub fn remove(&mut self, value: u32) -> bool {
        if self.count(value) == 0 {
            return false;
        }

        let mut node = 0;
        self.counts[node] -= 1;

        for bit in (0..Self::BITS).rev() {
            let b = ((value >> bit) & 1) as usize;
            node = self.children[node][b] as usize;
            self.counts[node] -= 1;
        }

        true
    }

    pub fn count(&self, value: u32) -> usize {
        let mut node = 0;

        for bit in (0..Self::BITS).rev() {
            let b = ((value >> bit) & 1) as usize;

            match self.child(node, b) {
                Some(next) => node = next,
                None => return 0,
            }
        }

        self.counts[node] as usize
    }

    /// `x ^ y` を最小にする要素 `y`
    pub fn min_xor(&self, x: u32) -> Option<u32> {
        if self.is_empty() {
            return None;
        }

        let mut node = 0;
        let mut y = 0;

        for bit in (0..Self::BITS).rev() {
            let b = ((x >> bit) & 1) as usize;

            let b = if self.child(node, b).is_some() {
                b
            } else {
                b ^ 1
            };

            node = self.child(node, b)?;
            y |= (b as u32) << bit;
        }

        Some(y)
    }

    /// `x ^ y < limit` を満たす要素 `y` の個数
    pub fn count_xor_less(&self, x: u32, limit: u32) -> usize {
        let mut node = 0;
        let mut count = 0;

        for bit in (0..Self::BITS).rev() {
            let xb = ((x >> bit) & 1) as usize;
            let lb = (limit >> bit) & 1;

            if lb == 1 {
                // このbitのxorが0になる側は全部 limit 未満
                if let Some(same) = self.child(node, xb) {
                    count += self.counts[same] as usize;
                }

                match self.child(node, xb ^ 1) {
                    Some(next) => node = next,
                    None => return count,
                }
            } else {
                match self.child(node, xb) {
                    Some(next) => node = next,
                    None => return count,
                }
            }
        }

        count
    }

    fn child(&self, node: usize, b: usize) -> Option<usize> {
        let next = self.children[node][b];

        if next == Self::NONE || self.counts[next as usize] == 0 {
            None
        } else {
            Some(next as usize)
        }
    }
}

impl Default for BinaryTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// GF(2)上の線形基底
#[derive(Debug, Clone)]
pub struct XorBasis {
    rows: [u64; 64],
    rank: usize,
}

#[allow(dead_code)]
impl XorBasis {
    pub fn new() -> Self {
        Self {
            rows: [0; 64],
            rank: 0,
        }
    }

    /// 基底に加わった (ランクが増えた) 場合はtrueを返す
    pub fn insert(&mut self, value: u64) -> bool {
        let x = self.reduce(value);

        if x == 0 {
            return false;
        }

        let top = 63 - x.leading_zeros() as usize;
        self.rows[top] = x;
        self.rank += 1;
        true
    }

    pub fn reduce(&self, value: u64) -> u64 {
        let mut x = value;

        for bit in (0..64).rev() {
            if (x >> bit) & 1 == 1 && self.rows[bit] != 0 {
                x ^= self.rows[bit];
            }
        }

        x
    }

    pub fn contains(&self, value: u64) -> bool {
        self.reduce(value) == 0
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl Default for XorBasis {
    fn default() -> Self {
        Self::new()
    }
}
