use crate::problem::Judge;
use proconio::input;

/// これ以下の確率は引き切ったものとみなす
const EMPTY: f64 = 1e-9;

pub fn solve(judge: &mut Judge) {
    input! {
        from judge.source(),
        t: usize,
        cases: [(f64, f64, f64, f64); t],
    }

    for (c, m, p, v) in cases {
        judge.answer_float(expected_races(Slips { cash: c, marker: m, pink: p }, v), 12);
    }
}

#[derive(Debug, Clone, Copy)]
struct Slips {
    cash: f64,
    marker: f64,
    pink: f64,
}

/// ピンクスリップを引くまでのレース数の期待値
///
/// 引くたびに v ずつ確率が減るので、深さは高々 2 / v 程度で済む
fn expected_races(slips: Slips, v: f64) -> f64 {
    // (状態, レース数, その状態に至る確率)
    let mut stack = vec![(slips, 1.0f64, 1.0f64)];
    let mut expected = 0.0;

    while let Some((s, races, prob)) = stack.pop() {
        expected += races * prob * s.pink;

        if s.cash > EMPTY {
            let d = s.cash.min(v);
            let next = if s.marker > EMPTY {
                Slips {
                    cash: s.cash - d,
                    marker: s.marker + d / 2.0,
                    pink: s.pink + d / 2.0,
                }
            } else {
                Slips {
                    cash: s.cash - d,
                    marker: 0.0,
                    pink: s.pink + d,
                }
            };

            stack.push((next, races + 1.0, prob * s.cash));
        }

        if s.marker > EMPTY {
            let d = s.marker.min(v);
            let next = if s.cash > EMPTY {
                Slips {
                    cash: s.cash + d / 2.0,
                    marker: s.marker - d,
                    pink: s.pink + d / 2.0,
                }
            } else {
                Slips {
                    cash: 0.0,
                    marker: s.marker - d,
                    pink: s.pink + d,
                }
            };

            stack.push((next, races + 1.0, prob * s.marker));
        }
    }

    expected
}
