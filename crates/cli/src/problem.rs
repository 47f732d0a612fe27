//! Problem-file parsing and solution reports.
//!
//! Two accepted inputs: the line-oriented text format (one constraint per
//! line as `a b c op`, plus an `objective: a b max|min` line) and a JSON
//! document with the same fields. Parsing is the input collaborator's job;
//! the engine only ever sees validated `Program` values, and every parse
//! error names the offending line or field.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lp2d::prelude::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ProblemDoc {
    constraints: Vec<ConstraintDoc>,
    objective: ObjectiveDoc,
}

#[derive(Debug, Deserialize)]
struct ConstraintDoc {
    a: f64,
    b: f64,
    c: f64,
    op: String,
}

#[derive(Debug, Deserialize)]
struct ObjectiveDoc {
    a: f64,
    b: f64,
    sense: String,
}

/// Load a program from disk; `.json` selects the JSON format, anything
/// else is parsed as the text format.
pub fn load_program(path: &Path) -> Result<Program> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        parse_json(&text)
    } else {
        parse_text(&text)
    }
}

fn parse_relation(op: &str) -> Result<Relation> {
    match op {
        "<=" => Ok(Relation::Le),
        ">=" => Ok(Relation::Ge),
        "=" => Ok(Relation::Eq),
        other => bail!("unknown operator {other:?} (use <=, >= or =)"),
    }
}

fn parse_sense(word: &str) -> Result<Sense> {
    match word {
        "max" => Ok(Sense::Maximize),
        "min" => Ok(Sense::Minimize),
        other => bail!("unknown sense {other:?} (use max or min)"),
    }
}

fn parse_coef(field: &str, what: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .with_context(|| format!("{what}: not a number: {field:?}"))
}

/// Parse the text format. Blank lines and `#` comments are skipped.
pub fn parse_text(text: &str) -> Result<Program> {
    let mut constraints = Vec::new();
    let mut objective: Option<Objective> = None;
    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("objective:") {
            if objective.is_some() {
                bail!("line {lineno}: duplicate objective");
            }
            let fields: Vec<&str> = rest.split_whitespace().collect();
            if fields.len() != 3 {
                bail!("line {lineno}: expected `objective: a b max|min`");
            }
            let a = parse_coef(fields[0], "objective coefficient a")
                .with_context(|| format!("line {lineno}"))?;
            let b = parse_coef(fields[1], "objective coefficient b")
                .with_context(|| format!("line {lineno}"))?;
            let sense = parse_sense(fields[2]).with_context(|| format!("line {lineno}"))?;
            objective = Some(Objective::new(a, b, sense));
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            bail!("line {lineno}: expected `a b c op`, got {line:?}");
        }
        let a = parse_coef(fields[0], "coefficient a").with_context(|| format!("line {lineno}"))?;
        let b = parse_coef(fields[1], "coefficient b").with_context(|| format!("line {lineno}"))?;
        let c = parse_coef(fields[2], "right-hand side c")
            .with_context(|| format!("line {lineno}"))?;
        let relation = parse_relation(fields[3]).with_context(|| format!("line {lineno}"))?;
        constraints.push(Constraint::new(a, b, c, relation));
    }
    let objective = objective.context("missing `objective: a b max|min` line")?;
    Program::new(constraints, objective).context("invalid program")
}

/// Parse the JSON format.
pub fn parse_json(text: &str) -> Result<Program> {
    let doc: ProblemDoc = serde_json::from_str(text).context("parsing problem JSON")?;
    let mut constraints = Vec::with_capacity(doc.constraints.len());
    for (i, con) in doc.constraints.iter().enumerate() {
        let relation = parse_relation(&con.op).with_context(|| format!("constraint {i}"))?;
        constraints.push(Constraint::new(con.a, con.b, con.c, relation));
    }
    let sense = parse_sense(&doc.objective.sense).context("objective")?;
    let objective = Objective::new(doc.objective.a, doc.objective.b, sense);
    Program::new(constraints, objective).context("invalid program")
}

fn relation_str(relation: Relation) -> &'static str {
    match relation {
        Relation::Le => "<=",
        Relation::Ge => ">=",
        Relation::Eq => "=",
    }
}

fn sense_str(sense: Sense) -> &'static str {
    match sense {
        Sense::Maximize => "max",
        Sense::Minimize => "min",
    }
}

/// Human summary in the classic graphical-method report style.
pub fn render_summary(solution: &Solution, sense: Sense) -> String {
    if !solution.is_feasible() {
        return "No feasible region found. No solution exists.".to_string();
    }
    let mut out = String::new();
    if solution.vertices.len() > 1 {
        out.push_str("Multiple Optimal Solutions Found:\n");
    }
    for (idx, v) in solution.vertices.iter().enumerate() {
        out.push_str(&format!(
            "Optimal Solution {}: x = {:.2}, y = {:.2}\n",
            idx + 1,
            v.point.x,
            v.point.y
        ));
    }
    let label = match sense {
        Sense::Maximize => "Maximum",
        Sense::Minimize => "Minimum",
    };
    out.push_str(&format!("{} Value of Z = {:.2}", label, solution.value));
    out
}

/// Render-ready JSON document: solve outcome, the feasible polygon in CCW
/// order, and the problem echoed back for boundary drawing.
pub fn solution_json(program: &Program, solution: &Solution, cfg: LpCfg) -> serde_json::Value {
    let polygon = order_ccw(&feasible_vertices(
        &candidate_vertices(program, cfg),
        program,
        cfg,
    ));
    let obj = program.objective();
    json!({
        "status": if solution.is_feasible() { "feasible" } else { "infeasible" },
        // NaN (infeasible) serializes as null.
        "value": solution.value,
        "optimal_vertices": solution
            .vertices
            .iter()
            .map(|v| json!({ "x": v.point.x, "y": v.point.y, "value": v.value }))
            .collect::<Vec<_>>(),
        "feasible_polygon": polygon
            .iter()
            .map(|p| json!({ "x": p.x, "y": p.y }))
            .collect::<Vec<_>>(),
        "constraints": program
            .constraints()
            .iter()
            .map(|con| json!({ "a": con.a, "b": con.b, "c": con.c, "op": relation_str(con.relation) }))
            .collect::<Vec<_>>(),
        "objective": { "a": obj.grad.x, "b": obj.grad.y, "sense": sense_str(obj.sense) },
    })
}
