//! Approximate feasible-region fill for plotting.
//!
//! Uniform grid over a bounded window; a sample survives if it passes the
//! same per-half-plane predicate the exact filter uses. Display-only: the
//! cloud both over- and under-shoots the true boundary at grid resolution,
//! so it must never back a feasibility or optimality decision.

use nalgebra::Vector2;

use crate::program::Program;
use crate::types::LpCfg;

/// Sampling window `[0, max_x] × [0, max_y]`. The lower corner is pinned
/// to the origin; the engine only ever works in the non-negative quadrant.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_x: 10.0,
            max_y: 10.0,
        }
    }
}

/// Feasible points of a `resolution × resolution` grid over `bounds`.
///
/// Resolution trades fill fidelity for cost; it is clamped to at least 2
/// so the window corners are always probed.
pub fn sample_region(
    program: &Program,
    bounds: Bounds,
    resolution: usize,
    cfg: LpCfg,
) -> Vec<Vector2<f64>> {
    let n = resolution.max(2);
    let hs = program.halfplanes();
    let step = (n - 1) as f64;
    let mut out = Vec::new();
    for i in 0..n {
        let x = bounds.max_x * (i as f64) / step;
        for j in 0..n {
            let y = bounds.max_y * (j as f64) / step;
            let p = Vector2::new(x, y);
            if hs.iter().all(|h| h.satisfies_eps(p, cfg.eps_feas)) {
                out.push(p);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Constraint, LpCfg, Objective, Relation, Sense};

    fn box_program(side: f64) -> Program {
        Program::new(
            vec![
                Constraint::new(1.0, 0.0, side, Relation::Le),
                Constraint::new(0.0, 1.0, side, Relation::Le),
            ],
            Objective::new(1.0, 1.0, Sense::Maximize),
        )
        .expect("valid program")
    }

    #[test]
    fn grid_counts_box_points() {
        let program = box_program(5.0);
        // 11x11 grid over [0,10]^2, step 1: kept points are x,y in 0..=5.
        let pts = sample_region(&program, Bounds::default(), 11, LpCfg::default());
        assert_eq!(pts.len(), 36);
    }

    #[test]
    fn samples_satisfy_every_constraint() {
        let program = box_program(7.5);
        let pts = sample_region(&program, Bounds::default(), 25, LpCfg::default());
        assert!(!pts.is_empty());
        for p in pts {
            assert!(program.contains_eps(p, 1e-9));
        }
    }

    #[test]
    fn empty_region_yields_no_samples() {
        let program = Program::new(
            vec![Constraint::new(1.0, 1.0, -1.0, Relation::Le)],
            Objective::new(1.0, 0.0, Sense::Maximize),
        )
        .expect("valid program");
        let pts = sample_region(&program, Bounds::default(), 50, LpCfg::default());
        assert!(pts.is_empty());
    }
}
