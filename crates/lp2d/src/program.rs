//! Validated constraint set plus objective (the problem statement).
//!
//! Normal form
//! - Every relation lowers to closed half-planes `n·x <= c` (`Ge` negated,
//!   `Eq` as an opposing pair), so feasibility is a single uniform loop.
//! - Non-negativity of both variables is materialized as two implicit
//!   half-planes appended after the explicit constraints, not as a
//!   special-cased coordinate filter.

use nalgebra::Vector2;
use thiserror::Error;

use crate::types::{Constraint, HalfPlane, Objective, Relation};

/// Rejection of a malformed constraint at construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProgramError {
    /// Both coefficients zero: `0 {op} c` has no boundary line.
    #[error("constraint {index} is degenerate: both coefficients are zero")]
    DegenerateConstraint { index: usize },
}

/// Immutable two-variable program: ordered constraints plus one objective.
///
/// Constraint order is preserved (deterministic downstream output).
/// Rebuilding means constructing a new instance; there is no mutation.
#[derive(Clone, Debug)]
pub struct Program {
    constraints: Vec<Constraint>,
    objective: Objective,
}

impl Program {
    /// Validate and build. Rejects any constraint whose coefficients are
    /// both zero, identifying it by position.
    pub fn new(constraints: Vec<Constraint>, objective: Objective) -> Result<Self, ProgramError> {
        for (index, con) in constraints.iter().enumerate() {
            if con.a == 0.0 && con.b == 0.0 {
                return Err(ProgramError::DegenerateConstraint { index });
            }
        }
        Ok(Self {
            constraints,
            objective,
        })
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[inline]
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Closed half-plane normal form, implicit `x >= 0` and `y >= 0`
    /// appended last.
    pub fn halfplanes(&self) -> Vec<HalfPlane> {
        let mut out = Vec::with_capacity(self.constraints.len() + 2);
        for con in &self.constraints {
            let (n, c) = con.boundary();
            match con.relation {
                Relation::Le => out.push(HalfPlane::new(n, c)),
                Relation::Ge => out.push(HalfPlane::new(-n, -c)),
                Relation::Eq => {
                    out.push(HalfPlane::new(n, c));
                    out.push(HalfPlane::new(-n, -c));
                }
            }
        }
        out.push(HalfPlane::new(Vector2::new(-1.0, 0.0), 0.0));
        out.push(HalfPlane::new(Vector2::new(0.0, -1.0), 0.0));
        out
    }

    /// Boundary lines `(n, c)` whose pairwise crossings are the vertex
    /// candidates: one per explicit constraint (an `Eq` pair shares a
    /// boundary) plus the two axes.
    pub fn boundary_lines(&self) -> Vec<(Vector2<f64>, f64)> {
        let mut out = Vec::with_capacity(self.constraints.len() + 2);
        for con in &self.constraints {
            out.push(con.boundary());
        }
        out.push((Vector2::new(1.0, 0.0), 0.0)); // x = 0
        out.push((Vector2::new(0.0, 1.0), 0.0)); // y = 0
        out
    }

    /// Membership of `p` against every constraint and the quadrant,
    /// within `eps`.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= -eps
            && p.y >= -eps
            && self.constraints.iter().all(|con| con.admits_eps(p, eps))
    }
}
