mod andrey_and_problem;
mod bad_luck_island;
mod bag_of_mice;
mod basketball_team;
mod bath_queue;
mod beautiful_mirrors;
mod bombing;
mod escalator;
mod find_pair;
mod first_digit_law;
mod lucky_subsequence;
mod maxim_and_restaurant;
mod nauuo_and_pictures;
mod new_year_arrangement;
mod pink_slips;
mod random_events;
mod snakes_and_ladders;
mod tree_array;
mod wizards_prize;

use super::{Cluster, Problem};

const C: Cluster = Cluster::Probability;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("28C", "Bath Queue", C, bath_queue::solve),
    Problem::new("50D", "Bombing", C, bombing::solve),
    Problem::new("54C", "First Digit Law", C, first_digit_law::solve),
    Problem::new("108D", "Basketball Team", C, basketball_team::solve),
    Problem::new("145C", "Lucky Subsequence", C, lucky_subsequence::solve),
    Problem::new("148D", "Bag of mice", C, bag_of_mice::solve),
    Problem::new("160C", "Find Pair", C, find_pair::solve),
    Problem::new("167B", "Wizards and Huge Prize", C, wizards_prize::solve),
    Problem::new("261B", "Maxim and Restaurant", C, maxim_and_restaurant::solve),
    Problem::new("262D", "Maxim and Restaurant", C, maxim_and_restaurant::solve),
    Problem::new("442B", "Andrey and Problem", C, andrey_and_problem::solve),
    Problem::new("518D", "Ilya and Escalator", C, escalator::solve),
    Problem::new("540D", "Bad Luck Island", C, bad_luck_island::solve),
    Problem::new(
        "908D",
        "New Year and Arbitrary Arrangement",
        C,
        new_year_arrangement::solve,
    ),
    Problem::new(
        "1172C1",
        "Nauuo and Pictures (easy version)",
        C,
        nauuo_and_pictures::solve,
    ),
    Problem::new("1245E", "Hyakugoku and Ladders", C, snakes_and_ladders::solve),
    Problem::new(
        "1264C",
        "Beautiful Mirrors with queries",
        C,
        beautiful_mirrors::solve,
    ),
    Problem::new("1461C", "Random Events", C, random_events::solve),
    Problem::new("1540B", "Tree Array", C, tree_array::solve),
    Problem::new("1541D", "Tree Array", C, tree_array::solve),
    Problem::new("1543C", "Need for Pink Slips", C, pink_slips::solve),
];
