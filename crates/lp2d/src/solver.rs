//! Vertex enumeration and optimization.
//!
//! Pipeline
//! - `candidate_vertices`: pairwise 2×2 boundary-line intersections,
//!   restricted to the non-negative quadrant.
//! - `feasible_vertices`: candidates surviving every half-plane predicate.
//! - `solve`: objective scan over the feasible vertices with tie collection.
//!
//! Near-parallel boundary pairs (|det| below `eps_det`) are expected
//! geometry and are skipped per pair; shared-boundary vertices arise from a
//! third line. Every stage is a pure function of its inputs.

use nalgebra::{matrix, Vector2};

use crate::program::Program;
use crate::types::{LpCfg, Solution, Status, Vertex};

/// Crossing point of two boundary lines `n·x = c`, `None` when
/// near-parallel or coincident.
fn line_intersection(
    l1: (Vector2<f64>, f64),
    l2: (Vector2<f64>, f64),
    eps_det: f64,
) -> Option<Vector2<f64>> {
    let a = matrix![l1.0.x, l1.0.y; l2.0.x, l2.0.y];
    let det = a.determinant();
    if det.abs() < eps_det {
        return None;
    }
    let inv = a.try_inverse()?;
    Some(inv * Vector2::new(l1.1, l2.1))
}

/// Candidate vertices: every pairwise boundary crossing inside the
/// non-negative quadrant. Small negative coordinates (numeric noise from
/// axis-touching intersections) are admitted via `eps_axis` and clamped to
/// the axis.
pub fn candidate_vertices(program: &Program, cfg: LpCfg) -> Vec<Vector2<f64>> {
    let lines = program.boundary_lines();
    let mut out = Vec::new();
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            let Some(p) = line_intersection(lines[i], lines[j], cfg.eps_det) else {
                continue;
            };
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue;
            }
            if p.x < -cfg.eps_axis || p.y < -cfg.eps_axis {
                continue;
            }
            out.push(Vector2::new(p.x.max(0.0), p.y.max(0.0)));
        }
    }
    out
}

/// Candidates satisfying every half-plane within `eps_feas`.
///
/// Intersection points lie exactly on two boundaries, so the slack is what
/// keeps rounding from rejecting them. Near-duplicates (the same geometric
/// vertex reached through different boundary pairs) collapse to the first
/// occurrence, preserving discovery order.
pub fn feasible_vertices(
    candidates: &[Vector2<f64>],
    program: &Program,
    cfg: LpCfg,
) -> Vec<Vector2<f64>> {
    let hs = program.halfplanes();
    let mut out: Vec<Vector2<f64>> = Vec::new();
    for &p in candidates {
        if !hs.iter().all(|h| h.satisfies_eps(p, cfg.eps_feas)) {
            continue;
        }
        if out.iter().any(|q| (q - p).norm() < cfg.eps_feas) {
            continue;
        }
        out.push(p);
    }
    out
}

/// Solve the program: enumerate, filter, optimize.
///
/// An empty feasible vertex set yields `Status::Infeasible` with no
/// vertices and a `NaN` value. Otherwise the result carries ALL vertices
/// whose objective value lies within `eps_tie` of the extreme (an edge of
/// tied optima is a normal LP outcome), in discovery order.
pub fn solve(program: &Program, cfg: LpCfg) -> Solution {
    let candidates = candidate_vertices(program, cfg);
    let feasible = feasible_vertices(&candidates, program, cfg);
    if feasible.is_empty() {
        return Solution::infeasible();
    }
    let obj = program.objective();
    let mut best = obj.eval(feasible[0]);
    for &p in &feasible[1..] {
        let v = obj.eval(p);
        if obj.better(v, best) {
            best = v;
        }
    }
    let vertices = feasible
        .iter()
        .map(|&p| Vertex {
            point: p,
            value: obj.eval(p),
        })
        .filter(|v| (v.value - best).abs() <= cfg.eps_tie)
        .collect();
    Solution {
        status: Status::Feasible,
        vertices,
        value: best,
    }
}
