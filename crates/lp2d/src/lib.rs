//! Geometric solver for two-variable linear programs.
//!
//! The engine enumerates pairwise intersections of constraint boundary
//! lines, keeps the points satisfying every constraint (eps-aware), and
//! reads the optimum off the surviving vertices — the classic graphical
//! method, headless. Presentation (problem files, plots) lives in the `cli`
//! crate; `solve` is fully usable without it.
//!
//! Every solve is a pure function of its inputs: no engine state survives
//! a call, and identical inputs reproduce identical results.

pub mod program;
pub mod rand;
pub mod region;
pub mod solver;
pub mod types;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use program::{Program, ProgramError};
pub use solver::solve;
pub use types::{Constraint, LpCfg, Objective, Relation, Sense, Solution, Status, Vertex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::program::{Program, ProgramError};
    pub use crate::rand::{draw_program, DrawCfg, ReplayToken};
    pub use crate::region::{sample_region, Bounds};
    pub use crate::solver::{candidate_vertices, feasible_vertices, solve};
    pub use crate::types::{
        Constraint, HalfPlane, LpCfg, Objective, Relation, Sense, Solution, Status, Vertex,
    };
    pub use crate::util::order_ccw;
    pub use nalgebra::Vector2;
}

#[cfg(test)]
mod tests;
