pub mod geometry;
pub mod graphs;
pub mod number_theory;
pub mod probability;
pub mod strings_dp;
pub mod tree_dp;
pub mod trees;
pub mod xor;

use crate::problem::Judge;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown problem id: {0} (see --list)")]
    UnknownProblem(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cluster {
    Trees,
    NumberTheory,
    Graphs,
    TreeDp,
    Geometry,
    StringsDp,
    Probability,
    Xor,
}

impl Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cluster::Trees => "trees",
            Cluster::NumberTheory => "number-theory",
            Cluster::Graphs => "graphs",
            Cluster::TreeDp => "tree-dp",
            Cluster::Geometry => "geometry",
            Cluster::StringsDp => "strings-dp",
            Cluster::Probability => "probability",
            Cluster::Xor => "xor",
        };

        write!(f, "{}", name)
    }
}

pub struct Problem {
    /// Codeforcesの問題ID (例: 1092F)
    pub id: &'static str,
    pub name: &'static str,
    pub cluster: Cluster,
    pub solve: fn(&mut Judge),
}

impl Problem {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        cluster: Cluster,
        solve: fn(&mut Judge),
    ) -> Self {
        Self {
            id,
            name,
            cluster,
            solve,
        }
    }
}

pub fn problems() -> impl Iterator<Item = &'static Problem> {
    trees::PROBLEMS
        .iter()
        .chain(number_theory::PROBLEMS)
        .chain(graphs::PROBLEMS)
        .chain(tree_dp::PROBLEMS)
        .chain(geometry::PROBLEMS)
        .chain(strings_dp::PROBLEMS)
        .chain(probability::PROBLEMS)
        .chain(xor::PROBLEMS)
}

pub fn find(id: &str) -> Result<&'static Problem, Error> {
    problems()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| Error::UnknownProblem(id.to_owned()))
}

#[cfg(test)]
mod test {
    use super::{find, problems, Cluster, Error};
    use itertools::Itertools;

    #[test]
    fn ids_are_unique() {
        let ids = problems().map(|p| p.id).collect_vec();
        assert_eq!(ids.len(), ids.iter().unique().count());
    }

    #[test]
    fn every_cluster_is_registered() {
        let clusters = problems().map(|p| p.cluster).unique().count();
        assert_eq!(8, clusters);
    }

    #[test]
    fn find_problem() {
        let problem = find("1092f").unwrap();
        assert_eq!("1092F", problem.id);
        assert_eq!(Cluster::TreeDp, problem.cluster);

        assert!(matches!(find("9999Z"), Err(Error::UnknownProblem(_))));
    }
}
