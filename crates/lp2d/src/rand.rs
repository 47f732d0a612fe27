//! Random two-variable programs (seeded, replayable).
//!
//! Purpose
//! - Deterministic problem generator for property tests and benches. Draws
//!   upper-bounding constraints with positive coefficients and positive
//!   right-hand sides, so the origin satisfies every draw and generated
//!   programs are feasible by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so individual draws are indexable without replaying a stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::program::Program;
use crate::types::{Constraint, Objective, Relation, Sense};

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct DrawCfg {
    pub constraint_count: usize,
    /// Upper bound for the `a`/`b` coefficients. Draws start at 0.1 so no
    /// boundary degenerates.
    pub coef_max: f64,
    /// Right-hand-side range `[rhs_min, rhs_max]`, kept positive.
    pub rhs_min: f64,
    pub rhs_max: f64,
}

impl Default for DrawCfg {
    fn default() -> Self {
        Self {
            constraint_count: 5,
            coef_max: 4.0,
            rhs_min: 2.0,
            rhs_max: 12.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random feasible program: `Le` constraints with positive
/// coefficients plus a random objective.
///
/// `None` only if the clamped configuration still fails program
/// validation, which the positive coefficient floor rules out in practice.
pub fn draw_program(cfg: DrawCfg, tok: ReplayToken) -> Option<Program> {
    let mut rng = tok.to_std_rng();
    let m = cfg.constraint_count.max(1);
    let coef_hi = cfg.coef_max.max(0.2);
    let rhs_lo = cfg.rhs_min.max(1e-3);
    let rhs_hi = cfg.rhs_max.max(rhs_lo + 1e-3);
    let mut constraints = Vec::with_capacity(m);
    for _ in 0..m {
        let a = rng.gen_range(0.1..coef_hi);
        let b = rng.gen_range(0.1..coef_hi);
        let c = rng.gen_range(rhs_lo..rhs_hi);
        constraints.push(Constraint::new(a, b, c, Relation::Le));
    }
    let sense = if rng.gen::<bool>() {
        Sense::Maximize
    } else {
        Sense::Minimize
    };
    let objective = Objective::new(
        rng.gen_range(0.5..coef_hi),
        rng.gen_range(0.5..coef_hi),
        sense,
    );
    Program::new(constraints, objective).ok()
}
