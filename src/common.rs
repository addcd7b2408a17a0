pub trait ChangeMinMax {
    fn change_min(&mut self, v: Self) -> bool;
    fn change_max(&mut self, v: Self) -> bool;
}

impl<T: PartialOrd> ChangeMinMax for T {
    fn change_min(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }

    fn change_max(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// 絶対誤差または相対誤差が `eps` 以内なら等しいとみなす
#[cfg(test)]
pub fn approx_eq(expected: f64, actual: f64, eps: f64) -> bool {
    let diff = (expected - actual).abs();
    diff <= eps || diff <= eps * expected.abs()
}

/// 空白区切りの実数列を比較する
#[cfg(test)]
pub fn assert_floats(expected: &[f64], output: &str) {
    let actual: Vec<f64> = output
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();

    assert_eq!(expected.len(), actual.len(), "output: {}", output);

    for (&e, &a) in expected.iter().zip(actual.iter()) {
        assert!(approx_eq(e, a, 1e-6), "expected {}, actual {}", e, a);
    }
}
