use crate::{data_structures::UnionFind, problem::Judge};
use proconio::{input, marker::Usize1};

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        enemies: [(Usize1, Usize1); m],
    }

    judge.answer(bench_size(n, &enemies));
}

/// 同じチームに敵がいない同人数の2チームを作るために外す人数
///
/// 各人の敵は高々2人なので成分はパスか閉路。奇閉路ごとに1人外し、
/// 残りが奇数ならもう1人外す
fn bench_size(n: usize, enemies: &[(usize, usize)]) -> usize {
    let mut uf = UnionFind::new(n);

    for &(u, v) in enemies {
        uf.unite(u, v);
    }

    let mut edge_count = vec![0; n];

    for &(u, _) in enemies {
        edge_count[uf.find(u)] += 1;
    }

    let mut odd_cycles = 0;

    for v in 0..n {
        if uf.find(v) != v {
            continue;
        }

        let size = uf.size(v);

        if edge_count[v] == size && size % 2 == 1 {
            odd_cycles += 1;
        }
    }

    if (n - odd_cycles) % 2 == 1 {
        odd_cycles + 1
    } else {
        odd_cycles
    }
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("1\n", run(solve, "5 4\n1 2\n2 4\n5 3\n1 4\n"));
        assert_eq!("0\n", run(solve, "6 2\n1 4\n3 4\n"));
        assert_eq!("2\n", run(solve, "6 6\n1 2\n2 3\n3 1\n4 5\n5 6\n6 4\n"));
    }
}
