// Clipper module - polygon Boolean operations
// Contains the sweep engine, its working structures and the path-level facade

pub mod clipper;
pub mod clipper_wrapper;
pub mod constants;
pub mod enums;
pub mod intersect_node;
pub mod join;
pub mod local_minima;
pub mod out_pt;
pub mod out_rec;
pub mod poly_tree;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items for convenience
pub use clipper_wrapper::{
    boolean_op, difference, intersect, union, xor, ClipperWrapper, ClipperWrapperD,
};
pub use enums::*;
pub use poly_tree::{poly_tree_to_paths, PolyPath, PolyTree};
