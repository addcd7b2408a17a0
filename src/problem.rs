use itertools::Itertools;
use proconio::source::once::OnceSource;
use std::{fmt::Display, fmt::Write as _, io::BufReader};

/// 入力全体を保持し、解答を1行ずつ溜めておく
pub struct Judge<'a> {
    source: OnceSource<BufReader<&'a [u8]>>,
    output: String,
}

#[allow(dead_code)]
impl<'a> Judge<'a> {
    pub fn new(text: &'a str) -> Self {
        let source = OnceSource::from(text);

        Self {
            source,
            output: String::new(),
        }
    }

    /// `proconio::input!` の `from` に渡す
    pub fn source(&mut self) -> &mut OnceSource<BufReader<&'a [u8]>> {
        &mut self.source
    }

    pub fn answer(&mut self, value: impl Display) {
        _ = writeln!(self.output, "{}", value);
    }

    pub fn answer_iter<T: Display>(&mut self, values: impl IntoIterator<Item = T>) {
        let line = values.into_iter().join(" ");
        self.answer(line);
    }

    pub fn answer_float(&mut self, value: f64, digits: usize) {
        _ = writeln!(self.output, "{:.*}", digits, value);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

/// テスト用: 入力文字列を与えて出力を返す
#[cfg(test)]
pub fn run(solve: fn(&mut Judge), input: &str) -> String {
    let mut judge = Judge::new(input);
    solve(&mut judge);
    judge.into_output()
}

#[cfg(test)]
mod test {
    use super::Judge;
    use proconio::input;

    #[test]
    fn read_and_answer() {
        let mut judge = Judge::new("3\n1 2 3\n");

        input! {
            from judge.source(),
            n: usize,
            a: [i64; n],
        }

        judge.answer(n);
        judge.answer_iter(a.iter().rev());
        judge.answer_float(0.5, 3);

        assert_eq!("3\n3 2 1\n0.500\n", judge.output());
    }
}
