#![cfg_attr(feature = "unstable", feature(test))]

mod builder;
mod grid;
mod orientation;
mod placement;
mod results;
mod solver;

pub use builder::*;
pub use grid::Grid;
pub use orientation::Orientation;
pub use results::*;
pub use solver::*;
