mod christmas_spruce;
mod coloring_a_tree;
mod cut_em_all;
mod edge_deletion;
mod journey;
mod kefa_and_park;
mod minimum_diameter_tree;
mod network_topology;
mod party;
mod queen;

use super::{Cluster, Problem};

pub const PROBLEMS: &[Problem] = &[
    Problem::new("116C", "Party", Cluster::Trees, party::solve),
    Problem::new("292B", "Network Topology", Cluster::Trees, network_topology::solve),
    Problem::new("580C", "Kefa and Park", Cluster::Trees, kefa_and_park::solve),
    Problem::new("839C", "Journey", Cluster::Trees, journey::solve),
    Problem::new("902B", "Coloring a Tree", Cluster::Trees, coloring_a_tree::solve),
    Problem::new("913B", "Christmas Spruce", Cluster::Trees, christmas_spruce::solve),
    Problem::new("982C", "Cut 'em all!", Cluster::Trees, cut_em_all::solve),
    Problem::new("1076D", "Edge Deletion", Cluster::Trees, edge_deletion::solve),
    Problem::new(
        "1086B",
        "Minimum Diameter Tree",
        Cluster::Trees,
        minimum_diameter_tree::solve,
    ),
    Problem::new("1143C", "Queen", Cluster::Trees, queen::solve),
];
