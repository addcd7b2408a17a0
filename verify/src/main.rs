use anyhow::{bail, Context};
use clap::Parser;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    time::Instant,
};

#[derive(Debug, Parser)]
struct Args {
    /// `<dir>/<problem id>/<name>.in` と `<name>.out` を置いたディレクトリ
    #[clap(short = 'd', long = "dir")]
    dir: PathBuf,
    #[clap(short = 'b', long = "bin", default_value = "target/release/codecontests")]
    bin: PathBuf,
    /// 指定した問題だけ実行する
    #[clap(short = 'p', long = "problem")]
    problem: Option<String>,
    /// 結果をJSONで書き出す
    #[clap(short = 'r', long = "report")]
    report: Option<PathBuf>,
    /// 実数トークンの許容誤差 (絶対または相対)
    #[clap(short = 't', long = "tolerance", default_value_t = 1e-6)]
    tolerance: f64,
}

#[derive(Debug, Clone)]
struct Case {
    problem: String,
    name: String,
    input: PathBuf,
    expected: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Trial {
    time_stamp: String,
    results: Vec<ProblemResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProblemResult {
    problem: String,
    passed: usize,
    total: usize,
    cases: Vec<CaseResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CaseResult {
    name: String,
    passed: bool,
    elapsed: String,
    message: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cases = load_cases(&args.dir, args.problem.as_deref())?;

    if cases.is_empty() {
        bail!("No test case found in {}", args.dir.display());
    }

    let results = cases
        .par_iter()
        .map(|case| run_case(&args.bin, case, args.tolerance))
        .collect::<Vec<_>>();

    let trial = summarize(&cases, results);
    let all_passed = show_results(&trial);

    if let Some(path) = &args.report {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &trial)?;
    }

    if !all_passed {
        bail!("Some problems failed");
    }

    Ok(())
}

fn load_cases(dir: &Path, problem: Option<&str>) -> anyhow::Result<Vec<Case>> {
    let mut cases = vec![];

    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let problem_dir = entry?.path();

        if !problem_dir.is_dir() {
            continue;
        }

        let Some(id) = problem_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };

        if problem.is_some_and(|p| !p.eq_ignore_ascii_case(id)) {
            continue;
        }

        for entry in std::fs::read_dir(&problem_dir)? {
            let input = entry?.path();

            if input.extension().is_some_and(|ext| ext == "in") {
                let expected = input.with_extension("out");

                // 期待出力のないケースはスキップ
                if !expected.exists() {
                    continue;
                }

                let name = input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_owned();

                cases.push(Case {
                    problem: id.to_owned(),
                    name,
                    input,
                    expected,
                });
            }
        }
    }

    cases.sort_by(|a, b| (&a.problem, &a.name).cmp(&(&b.problem, &b.name)));
    Ok(cases)
}

fn run_case(bin: &Path, case: &Case, tolerance: f64) -> CaseResult {
    let since = Instant::now();
    let verdict = execute(bin, case).and_then(|(actual, expected)| {
        compare(&expected, &actual, tolerance).map_err(|message| anyhow::anyhow!(message))
    });

    CaseResult {
        name: case.name.clone(),
        passed: verdict.is_ok(),
        elapsed: format!("{:?}", since.elapsed()),
        message: verdict.err().map(|e| e.to_string()).unwrap_or_default(),
    }
}

/// (実際の出力, 期待出力)
fn execute(bin: &Path, case: &Case) -> anyhow::Result<(String, String)> {
    let input = std::fs::read(&case.input)?;
    let expected = std::fs::read_to_string(&case.expected)?;

    let mut child = Command::new(bin)
        .arg(&case.problem)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start {}", bin.display()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(&input)?;
    }

    let output = child.wait_with_output()?;

    if !output.status.success() {
        bail!(
            "exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok((String::from_utf8_lossy(&output.stdout).into_owned(), expected))
}

/// 空白区切りのトークンごとに比較する。小数点を含むトークンは誤差を許す
fn compare(expected: &str, actual: &str, tolerance: f64) -> Result<(), String> {
    let expected = expected.split_whitespace().collect_vec();
    let actual = actual.split_whitespace().collect_vec();

    if expected.len() != actual.len() {
        return Err(format!(
            "expected {} tokens, found {}",
            expected.len(),
            actual.len()
        ));
    }

    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        if e == a {
            continue;
        }

        let is_float = e.contains('.') || a.contains('.');

        if let (true, Ok(x), Ok(y)) = (is_float, e.parse::<f64>(), a.parse::<f64>()) {
            let diff = (x - y).abs();

            if diff <= tolerance || diff <= tolerance * x.abs() {
                continue;
            }
        }

        return Err(format!("token {}: expected {}, found {}", i, e, a));
    }

    Ok(())
}

fn summarize(cases: &[Case], results: Vec<CaseResult>) -> Trial {
    let results = cases
        .iter()
        .zip(results)
        .group_by(|(case, _)| case.problem.clone())
        .into_iter()
        .map(|(problem, group)| {
            let cases = group.map(|(_, result)| result).collect_vec();

            ProblemResult {
                problem,
                passed: cases.iter().filter(|c| c.passed).count(),
                total: cases.len(),
                cases,
            }
        })
        .collect_vec();

    Trial {
        time_stamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        results,
    }
}

/// すべて通ればtrue
fn show_results(trial: &Trial) -> bool {
    let mut solved = 0;
    let by_problem = trial
        .results
        .iter()
        .map(|r| (r.problem.as_str(), r))
        .collect::<BTreeMap<_, _>>();

    println!("[Trial {}]", trial.time_stamp);

    for (problem, result) in by_problem {
        println!(
            "{:>6} | Results: {}/{} tests passed",
            problem, result.passed, result.total
        );

        for case in result.cases.iter().filter(|c| !c.passed) {
            println!("       | {}: {}", case.name, case.message);
        }

        if result.passed == result.total {
            solved += 1;
        }
    }

    println!(
        "Final Results: {}/{} problems passed all tests",
        solved,
        trial.results.len()
    );

    solved == trial.results.len()
}

#[cfg(test)]
mod test {
    use super::compare;

    #[test]
    fn exact_tokens() {
        assert!(compare("2\n1 2\n", "2 1\n2", 1e-6).is_ok());
        assert!(compare("YES\n", "NO\n", 1e-6).is_err());
        assert!(compare("1 2", "1 2 3", 1e-6).is_err());
    }

    #[test]
    fn float_tokens() {
        assert!(compare("0.658730159", "0.6587301587", 1e-6).is_ok());
        assert!(compare("1.5", "1.500000000000000", 1e-6).is_ok());
        assert!(compare("0.5", "0.6", 1e-6).is_err());
    }

    #[test]
    fn integers_are_compared_exactly() {
        assert!(compare("370000006", "370000007", 1e-6).is_err());
    }
}
