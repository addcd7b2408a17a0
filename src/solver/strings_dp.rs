mod alyona_and_strings;
mod bear_compressing;
mod caesars_legions;
mod enemy_is_weak;
mod increasing_subsequences;
mod minesweeper;
mod newspaper_headline;
mod password;
mod subsequences_hard;

use super::{Cluster, Problem};

const C: Cluster = Cluster::StringsDp;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("61E", "Enemy is weak", C, enemy_is_weak::solve),
    Problem::new("91A", "Newspaper Headline", C, newspaper_headline::solve),
    Problem::new("118D", "Caesar's Legions", C, caesars_legions::solve),
    Problem::new("126B", "Password", C, password::solve),
    Problem::new("404D", "Minesweeper 1D", C, minesweeper::solve),
    Problem::new("597C", "Subsequences", C, increasing_subsequences::solve),
    Problem::new("653B", "Bear and Compressing", C, bear_compressing::solve),
    Problem::new("682D", "Alyona and Strings", C, alyona_and_strings::solve),
    Problem::new("1183H", "Subsequences (hard version)", C, subsequences_hard::solve),
];
