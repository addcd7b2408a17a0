mod appleman_and_tree;
mod best_path;
mod connecting_universities;
mod humongous_tree;
mod linova_and_kingdom;
mod maximum_cost;
mod maximum_white_subtree;
mod serval_and_rooted_tree;
mod tree_painting;

use super::{Cluster, Problem};

const C: Cluster = Cluster::TreeDp;

pub const PROBLEMS: &[Problem] = &[
    Problem::new("461B", "Appleman and Tree", C, appleman_and_tree::solve),
    Problem::new("700B", "Connecting Universities", C, connecting_universities::solve),
    Problem::new("1083A", "The Fair Nut and the Best Path", C, best_path::solve),
    Problem::new("1084D", "The Fair Nut and the Best Path", C, best_path::solve),
    Problem::new("1092F", "Tree with Maximum Cost", C, maximum_cost::solve),
    Problem::new("1153D", "Serval and Rooted Tree", C, serval_and_rooted_tree::solve),
    Problem::new("1187E", "Tree Painting", C, tree_painting::solve),
    Problem::new("1324F", "Maximum White Subtree", C, maximum_white_subtree::solve),
    Problem::new("1336A", "Linova and Kingdom", C, linova_and_kingdom::solve),
    Problem::new("1528A", "Parsa's Humongous Tree", C, humongous_tree::solve),
];
