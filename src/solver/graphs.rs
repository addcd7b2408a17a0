mod brain_network;
mod colorful_graph;
mod coloring_edges;
mod connected_components;
mod cthulhu;
mod forming_teams;
mod friendship_condition;
mod hongcow_nation;
mod more_bosses;
mod new_reform;
mod pairs;
mod secret_passwords;
mod tournament;
mod two_dots;
mod zero_one_mst;

use super::{Cluster, Problem};

const C: Cluster = Cluster::Graphs;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("27B", "Tournament", C, tournament::solve),
    Problem::new("104C", "Cthulhu", C, cthulhu::solve),
    Problem::new("216B", "Forming Teams", C, forming_teams::solve),
    Problem::new("505B", "Mr. Kitayuta's Colorful Graph", C, colorful_graph::solve),
    Problem::new("510B", "Fox And Two Dots", C, two_dots::solve),
    Problem::new("659E", "New Reform", C, new_reform::solve),
    Problem::new("690C1", "Brain Network (easy)", C, brain_network::solve),
    Problem::new("745C", "Hongcow Builds A Nation", C, hongcow_nation::solve),
    Problem::new("771A", "Bear and Friendship Condition", C, friendship_condition::solve),
    Problem::new("791B", "Bear and Friendship Condition", C, friendship_condition::solve),
    Problem::new("920E", "Connected Components?", C, connected_components::solve),
    Problem::new("1000E", "We Need More Bosses", C, more_bosses::solve),
    Problem::new("1169B", "Pairs", C, pairs::solve),
    Problem::new("1217D", "Coloring Edges", C, coloring_edges::solve),
    Problem::new("1242B", "0-1 MST", C, zero_one_mst::solve),
    Problem::new("1243D", "0-1 MST", C, zero_one_mst::solve),
    Problem::new("1263D", "Secret Passwords", C, secret_passwords::solve),
];
