mod common;
mod data_structures;
mod geometry;
mod graph;
mod math;
mod problem;
mod solver;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use std::{
    io::{self, Write},
    time::Instant,
};

use crate::problem::Judge;

#[derive(Debug, Parser)]
#[clap(about = "Codeforces solutions dispatched by problem id")]
struct Args {
    /// 問題ID (例: 1092F)。入力は標準入力から読む
    problem: Option<String>,
    /// 登録済みの問題を一覧表示する
    #[clap(short = 'l', long = "list")]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.list {
        show_problems()?;
        return Ok(());
    }

    let id = args
        .problem
        .context("problem id is required (or pass --list)")?;
    let problem = solver::find(&id)?;
    info!("{} {} [{}]", problem.id, problem.name, problem.cluster);

    let input = io::read_to_string(io::stdin()).context("failed to read stdin")?;
    let since = Instant::now();

    let mut judge = Judge::new(&input);
    (problem.solve)(&mut judge);

    debug!("{} solved in {:?}", problem.id, since.elapsed());

    let mut stdout = io::stdout().lock();
    stdout.write_all(judge.output().as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn show_problems() -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    for (cluster, problems) in &solver::problems().group_by(|p| p.cluster) {
        writeln!(stdout, "[{}]", cluster)?;

        for problem in problems {
            writeln!(stdout, "  {:<6} {}", problem.id, problem.name)?;
        }
    }

    Ok(())
}
