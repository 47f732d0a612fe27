//! Core problem types and tolerances.
//!
//! - `LpCfg`: centralizes epsilons for determinant, feasibility, tie, and
//!   axis checks.
//! - `Constraint`/`Objective`: the user-facing statement `a·x + b·y {op} c`
//!   and `Z = a·x + b·y`.
//! - `HalfPlane`: closed normal form `n·x <= c` used by every engine
//!   predicate.
//! - `Solution`: per-solve output (status, tied optimal vertices, value).

use nalgebra::Vector2;

/// Engine configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct LpCfg {
    /// Below this |det| a boundary pair counts as parallel.
    pub eps_det: f64,
    /// Slack for feasibility predicates.
    pub eps_feas: f64,
    /// Objective-value band treated as a tie.
    pub eps_tie: f64,
    /// Negative slack for the non-negative-quadrant filter.
    pub eps_axis: f64,
}

impl Default for LpCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_feas: 1e-9,
            eps_tie: 1e-9,
            eps_axis: 1e-9,
        }
    }
}

/// Comparison operator of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Le,
    Ge,
    Eq,
}

/// Linear constraint `a·x + b·y {relation} c`.
///
/// Invariant: not both `a` and `b` are zero. Enforced at `Program`
/// construction, not here, so the offending index can be reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub relation: Relation,
}

impl Constraint {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, relation: Relation) -> Self {
        Self { a, b, c, relation }
    }

    /// Left-hand side `a·x + b·y` at `p`.
    #[inline]
    pub fn lhs(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y
    }

    /// Does `p` satisfy the constraint within `eps`?
    #[inline]
    pub fn admits_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let v = self.lhs(p);
        match self.relation {
            Relation::Le => v <= self.c + eps,
            Relation::Ge => v >= self.c - eps,
            Relation::Eq => (v - self.c).abs() <= eps,
        }
    }

    /// Boundary line `(n, c)` with `n = (a, b)`, i.e. `n·x = c`.
    #[inline]
    pub fn boundary(&self) -> (Vector2<f64>, f64) {
        (Vector2::new(self.a, self.b), self.c)
    }
}

/// Closed half-plane `n·x <= c`.
#[derive(Clone, Copy, Debug)]
pub struct HalfPlane {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl HalfPlane {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}

/// Optimization direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Linear objective `Z = a·x + b·y`, optimized per `sense`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Objective {
    pub grad: Vector2<f64>,
    pub sense: Sense,
}

impl Objective {
    #[inline]
    pub fn new(a: f64, b: f64, sense: Sense) -> Self {
        Self {
            grad: Vector2::new(a, b),
            sense,
        }
    }

    /// Objective value at `p`.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.grad.dot(&p)
    }

    /// True if `lhs` improves on `rhs` for this sense.
    #[inline]
    pub fn better(&self, lhs: f64, rhs: f64) -> bool {
        match self.sense {
            Sense::Maximize => lhs > rhs,
            Sense::Minimize => lhs < rhs,
        }
    }
}

/// Feasible vertex tagged with its objective value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub point: Vector2<f64>,
    pub value: f64,
}

/// Solve outcome classification. Infeasible is data, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Feasible,
    Infeasible,
}

/// Result of one solve: the tied optimal vertices in discovery order and
/// the optimal value (`NaN` when infeasible).
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub status: Status,
    pub vertices: Vec<Vertex>,
    pub value: f64,
}

impl Solution {
    pub(crate) fn infeasible() -> Self {
        Self {
            status: Status::Infeasible,
            vertices: Vec::new(),
            value: f64::NAN,
        }
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.status == Status::Feasible
    }
}
