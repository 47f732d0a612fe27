use crate::prelude::*;
use proptest::prelude::*;

fn program(constraints: Vec<Constraint>, objective: Objective) -> Program {
    Program::new(constraints, objective).expect("valid program")
}

#[test]
fn non_parallel_boundaries_cross_exactly_once() {
    // x + y <= 4 and x - y <= 0 cross at (2, 2).
    let c1 = Constraint::new(1.0, 1.0, 4.0, Relation::Le);
    let c2 = Constraint::new(1.0, -1.0, 0.0, Relation::Le);
    let p = program(vec![c1, c2], Objective::new(1.0, 0.0, Sense::Maximize));
    let cands = candidate_vertices(&p, LpCfg::default());
    let hit: Vec<_> = cands
        .iter()
        .filter(|q| (*q - Vector2::new(2.0, 2.0)).norm() < 1e-9)
        .collect();
    assert_eq!(hit.len(), 1);
    // The crossing satisfies both boundaries as equalities.
    assert!((c1.lhs(*hit[0]) - c1.c).abs() < 1e-9);
    assert!((c2.lhs(*hit[0]) - c2.c).abs() < 1e-9);
}

#[test]
fn parallel_boundaries_yield_no_candidate() {
    // Two parallel constraints: only axis crossings remain.
    let p = program(
        vec![
            Constraint::new(1.0, 1.0, 2.0, Relation::Le),
            Constraint::new(1.0, 1.0, 4.0, Relation::Le),
        ],
        Objective::new(1.0, 1.0, Sense::Maximize),
    );
    let cands = candidate_vertices(&p, LpCfg::default());
    // (0,2), (2,0), (0,4), (4,0), (0,0) — nothing from the parallel pair.
    assert_eq!(cands.len(), 5);
    assert!(cands.iter().all(|q| q.x >= 0.0 && q.y >= 0.0));
}

#[test]
fn classic_max_program() {
    // 2x + 3y <= 6, x + 2y <= 4, max 4x + 3y. Both boundaries pass through
    // (0,2), so the feasible vertex set is {(0,0), (3,0), (0,2)} and the
    // optimum is (3,0) with Z = 12 (4·3 > 4·0+3·2 > 0).
    let p = program(
        vec![
            Constraint::new(2.0, 3.0, 6.0, Relation::Le),
            Constraint::new(1.0, 2.0, 4.0, Relation::Le),
        ],
        Objective::new(4.0, 3.0, Sense::Maximize),
    );
    let cfg = LpCfg::default();
    let verts = feasible_vertices(&candidate_vertices(&p, cfg), &p, cfg);
    assert_eq!(verts.len(), 3);
    for expected in [
        Vector2::new(0.0, 0.0),
        Vector2::new(3.0, 0.0),
        Vector2::new(0.0, 2.0),
    ] {
        assert!(
            verts.iter().any(|q| (q - expected).norm() < 1e-9),
            "missing vertex {expected:?}"
        );
    }
    let sol = solve(&p, cfg);
    assert_eq!(sol.status, Status::Feasible);
    assert_eq!(sol.vertices.len(), 1);
    assert!((sol.vertices[0].point - Vector2::new(3.0, 0.0)).norm() < 1e-9);
    assert!((sol.value - 12.0).abs() < 1e-9);
}

#[test]
fn infeasible_program_reports_status() {
    // x + y <= -1 cannot hold in the non-negative quadrant.
    let p = program(
        vec![Constraint::new(1.0, 1.0, -1.0, Relation::Le)],
        Objective::new(1.0, 1.0, Sense::Maximize),
    );
    let sol = solve(&p, LpCfg::default());
    assert_eq!(sol.status, Status::Infeasible);
    assert!(sol.vertices.is_empty());
    assert!(sol.value.is_nan());
}

#[test]
fn coincident_boundaries_tie_along_edge() {
    // x + y <= 4 and x + y >= 4 pin the region to the segment between
    // (4,0) and (0,4); an objective parallel to it ties both endpoints.
    let p = program(
        vec![
            Constraint::new(1.0, 1.0, 4.0, Relation::Le),
            Constraint::new(1.0, 1.0, 4.0, Relation::Ge),
        ],
        Objective::new(1.0, 1.0, Sense::Maximize),
    );
    let sol = solve(&p, LpCfg::default());
    assert_eq!(sol.status, Status::Feasible);
    assert_eq!(sol.vertices.len(), 2);
    for expected in [Vector2::new(0.0, 4.0), Vector2::new(4.0, 0.0)] {
        assert!(
            sol.vertices.iter().any(|v| (v.point - expected).norm() < 1e-9),
            "missing tied vertex {expected:?}"
        );
    }
    assert!((sol.value - 4.0).abs() < 1e-9);
}

#[test]
fn objective_parallel_to_binding_edge_reports_all_optima() {
    // max x + y over {x + y <= 4, x <= 3, y <= 3}: the whole edge from
    // (3,1) to (1,3) is optimal; both endpoints must be reported.
    let p = program(
        vec![
            Constraint::new(1.0, 1.0, 4.0, Relation::Le),
            Constraint::new(1.0, 0.0, 3.0, Relation::Le),
            Constraint::new(0.0, 1.0, 3.0, Relation::Le),
        ],
        Objective::new(1.0, 1.0, Sense::Maximize),
    );
    let sol = solve(&p, LpCfg::default());
    assert_eq!(sol.vertices.len(), 2);
    for expected in [Vector2::new(3.0, 1.0), Vector2::new(1.0, 3.0)] {
        assert!(
            sol.vertices.iter().any(|v| (v.point - expected).norm() < 1e-9),
            "missing tied vertex {expected:?}"
        );
    }
    assert!((sol.value - 4.0).abs() < 1e-9);
}

#[test]
fn equality_constraint_restricts_to_segment() {
    let constraints = vec![Constraint::new(1.0, 1.0, 2.0, Relation::Eq)];
    let max = solve(
        &program(constraints.clone(), Objective::new(1.0, 0.0, Sense::Maximize)),
        LpCfg::default(),
    );
    assert_eq!(max.vertices.len(), 1);
    assert!((max.vertices[0].point - Vector2::new(2.0, 0.0)).norm() < 1e-9);
    assert!((max.value - 2.0).abs() < 1e-9);

    let min = solve(
        &program(constraints, Objective::new(1.0, 0.0, Sense::Minimize)),
        LpCfg::default(),
    );
    assert_eq!(min.vertices.len(), 1);
    assert!((min.vertices[0].point - Vector2::new(0.0, 2.0)).norm() < 1e-9);
    assert!(min.value.abs() < 1e-9);
}

#[test]
fn solve_is_deterministic() {
    let p = program(
        vec![
            Constraint::new(2.0, 3.0, 6.0, Relation::Le),
            Constraint::new(1.0, 2.0, 4.0, Relation::Le),
        ],
        Objective::new(4.0, 3.0, Sense::Maximize),
    );
    let s1 = solve(&p, LpCfg::default());
    let s2 = solve(&p, LpCfg::default());
    // Bit-identical: pure function, no hidden state.
    assert_eq!(s1, s2);
}

#[test]
fn shrinking_tolerance_keeps_optimum() {
    let p = program(
        vec![
            Constraint::new(2.0, 3.0, 6.0, Relation::Le),
            Constraint::new(1.0, 2.0, 4.0, Relation::Le),
        ],
        Objective::new(4.0, 3.0, Sense::Maximize),
    );
    let loose = solve(&p, LpCfg::default());
    let tight = solve(
        &p,
        LpCfg {
            eps_det: 1e-12,
            eps_feas: 1e-12,
            eps_tie: 1e-12,
            eps_axis: 1e-12,
        },
    );
    assert!((loose.value - tight.value).abs() < 1e-12);
}

#[test]
fn degenerate_constraint_rejected_with_index() {
    let err = Program::new(
        vec![
            Constraint::new(1.0, 1.0, 4.0, Relation::Le),
            Constraint::new(0.0, 0.0, 1.0, Relation::Ge),
        ],
        Objective::new(1.0, 0.0, Sense::Maximize),
    )
    .unwrap_err();
    assert_eq!(err, ProgramError::DegenerateConstraint { index: 1 });
}

#[test]
fn feasible_vertices_satisfy_every_constraint() {
    let p = program(
        vec![
            Constraint::new(1.0, 2.0, 8.0, Relation::Le),
            Constraint::new(3.0, 1.0, 9.0, Relation::Le),
            Constraint::new(1.0, 1.0, 1.0, Relation::Ge),
        ],
        Objective::new(2.0, 5.0, Sense::Maximize),
    );
    let cfg = LpCfg::default();
    let verts = feasible_vertices(&candidate_vertices(&p, cfg), &p, cfg);
    assert!(!verts.is_empty());
    for v in verts {
        assert!(p.contains_eps(v, cfg.eps_feas));
    }
}

proptest! {
    #[test]
    fn random_programs_solve_cleanly(seed in 0u64..64, index in 0u64..16) {
        let p = draw_program(DrawCfg::default(), ReplayToken { seed, index })
            .expect("generator yields valid programs");
        let cfg = LpCfg::default();
        let sol = solve(&p, cfg);
        // Upper bounds with positive rhs keep the origin feasible.
        prop_assert_eq!(sol.status, Status::Feasible);
        prop_assert!(!sol.vertices.is_empty());
        for v in &sol.vertices {
            prop_assert!(p.contains_eps(v.point, 1e-6));
            prop_assert!((v.value - sol.value).abs() <= cfg.eps_tie);
        }
    }
}
