use crate::problem::Judge;
use proconio::input;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        n: usize,
        m: usize,
        a: [[u32; m]; n],
    }

    match choose_columns(&a) {
        Some(columns) => {
            judge.answer("TAK");
            judge.answer_iter(columns.iter().map(|c| c + 1));
        }
        None => judge.answer("NIE"),
    }
}

/// 各行から1つずつ選んだ値のxorが正になる列番号
fn choose_columns(a: &[Vec<u32>]) -> Option<Vec<usize>> {
    let mut columns = vec![0; a.len()];
    let first = a.iter().fold(0, |acc, row| acc ^ row[0]);

    if first != 0 {
        return Some(columns);
    }

    // 1行だけ先頭と異なる値に替えればxorは0でなくなる
    for (i, row) in a.iter().enumerate() {
        if let Some(j) = row.iter().position(|&x| x != row[0]) {
            columns[i] = j;
            return Some(columns);
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::problem::run;

    #[test]
    fn samples() {
        assert_eq!("NIE\n", run(solve, "3 2\n0 0\n0 0\n0 0\n"));
        assert_eq!("TAK\n1 3\n", run(solve, "2 3\n7 7 7\n7 7 10\n"));
    }
}
