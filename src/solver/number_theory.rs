mod ancient_computer;
mod buying_shovels;
mod candies;
mod coprime_subsequences;
mod counting_arrays;
mod dividing_cheese;
mod division;
mod divisor_subtraction;
mod game_23;
mod meaningless_operations;
mod multiply_divide;
mod number_into_sequence;
mod product_of_three;
mod rectangular_game;
mod tile_painting;
mod win_or_freeze;

use super::{Cluster, Problem};

const C: Cluster = Cluster::NumberTheory;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("150A", "Win or Freeze", C, win_or_freeze::solve),
    Problem::new("151C", "Win or Freeze", C, win_or_freeze::solve),
    Problem::new("177B1", "Rectangular Game", C, rectangular_game::solve),
    Problem::new("371B", "Fox Dividing Cheese", C, dividing_cheese::solve),
    Problem::new("803F", "Coprime Subsequences", C, coprime_subsequences::solve),
    Problem::new("893E", "Counting Arrays", C, counting_arrays::solve),
    Problem::new("1076B", "Divisor Subtraction", C, divisor_subtraction::solve),
    Problem::new("1110C", "Meaningless Operations", C, meaningless_operations::solve),
    Problem::new("1141A", "Game 23", C, game_23::solve),
    Problem::new("1242A", "Tile Painting", C, tile_painting::solve),
    Problem::new("1294C", "Product of Three Numbers", C, product_of_three::solve),
    Problem::new("1343A", "Candies", C, candies::solve),
    Problem::new("1360D", "Buying Shovels", C, buying_shovels::solve),
    Problem::new("1362A", "Johnny and Ancient Computer", C, ancient_computer::solve),
    Problem::new("1374B", "Multiply by 2, divide by 6", C, multiply_divide::solve),
    Problem::new("1444A", "Division", C, division::solve),
    Problem::new("1454D", "Number into Sequence", C, number_into_sequence::solve),
];
