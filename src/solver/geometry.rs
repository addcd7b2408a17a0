mod bicycle_race;
mod constellation;
mod crazy_town;
mod cut_length;
mod eight_point_sets;
mod five_dimensional_points;
mod hide_and_seek;
mod letter_a;
mod pair_of_lines;
mod parallelogram;
mod polyline;
mod power_transmission;
mod rectangle_and_square;
mod shawarma_tent;
mod supercentral_point;
mod triangle;
mod vanya_and_triangles;
mod zoo;

use super::{Cluster, Problem};

const C: Cluster = Cluster::Geometry;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("13B", "Letter A", C, letter_a::solve),
    Problem::new("32E", "Hide-and-Seek", C, hide_and_seek::solve),
    Problem::new("135B", "Rectangle and Square", C, rectangle_and_square::solve),
    Problem::new("136D", "Rectangle and Square", C, rectangle_and_square::solve),
    Problem::new("165A", "Supercentral Point", C, supercentral_point::solve),
    Problem::new("183B", "Zoo", C, zoo::solve),
    Problem::new("334B", "Eight Point Sets", C, eight_point_sets::solve),
    Problem::new("407A", "Triangle", C, triangle::solve),
    Problem::new("498A", "Crazy Town", C, crazy_town::solve),
    Problem::new("499C", "Crazy Town", C, crazy_town::solve),
    Problem::new("552D", "Vanya and Triangles", C, vanya_and_triangles::solve),
    Problem::new("598F", "Cut Length", C, cut_length::solve),
    Problem::new("617D", "Polyline", C, polyline::solve),
    Problem::new("618C", "Constellation", C, constellation::solve),
    Problem::new("659D", "Bicycle Race", C, bicycle_race::solve),
    Problem::new("749B", "Parallelogram is Back", C, parallelogram::solve),
    Problem::new("850A", "Five Dimensional Points", C, five_dimensional_points::solve),
    Problem::new("961D", "Pair of Lines", C, pair_of_lines::solve),
    Problem::new(
        "1163C1",
        "Power Transmission (Easy Edition)",
        C,
        power_transmission::solve,
    ),
    Problem::new(
        "1163C2",
        "Power Transmission (Hard Edition)",
        C,
        power_transmission::solve,
    ),
    Problem::new("1271C", "Shawarma Tent", C, shawarma_tent::solve),
];
