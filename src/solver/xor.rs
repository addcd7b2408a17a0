mod agaga_xooorrr;
mod bad_xor;
mod changing_array;
mod choosing_the_commander;
mod cogrowing_sequence;
mod ehab_the_xorcist;
mod industrial_nim;
mod magic_formulas;
mod magical_permutation;
mod mahmoud_and_ehab;
mod perfect_security;
mod square_subsets;
mod xor_equation;

use super::{Cluster, Problem};

const C: Cluster = Cluster::Xor;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("15C", "Industrial Nim", C, industrial_nim::solve),
    Problem::new("424C", "Magic Formulas", C, magic_formulas::solve),
    Problem::new("627A", "XOR Equation", C, xor_equation::solve),
    Problem::new("634B", "XOR Equation", C, xor_equation::solve),
    Problem::new("817E", "Choosing The Commander", C, choosing_the_commander::solve),
    Problem::new("862C", "Mahmoud and Ehab and the xor", C, mahmoud_and_ehab::solve),
    Problem::new("895C", "Square Subsets", C, square_subsets::solve),
    Problem::new("923C", "Perfect Security", C, perfect_security::solve),
    Problem::new("1054D", "Changing Array", C, changing_array::solve),
    Problem::new("1151B", "Dima and a Bad XOR", C, bad_xor::solve),
    Problem::new("1163E", "Magical Permutation", C, magical_permutation::solve),
    Problem::new("1325D", "Ehab the Xorcist", C, ehab_the_xorcist::solve),
    Problem::new("1516B", "AGAGA XOOORRR", C, agaga_xooorrr::solve),
    Problem::new("1547D", "Co-growing Sequence", C, cogrowing_sequence::solve),
];
