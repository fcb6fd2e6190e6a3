// Pipeline tests against the public API, using a scripted backend so no
// native solver build is needed

use std::sync::Arc;

use siteopt::{
    Comparison, Instance, MilpProblem, MilpSolver, OptimalPoint, Planner, SolveOutcome,
    SolverError,
};

/// Backend that replays a canned outcome.
struct ScriptedSolver(SolveOutcome);

impl MilpSolver for ScriptedSolver {
    fn solve(&self, _problem: &MilpProblem) -> Result<SolveOutcome, SolverError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}

fn unit_instance(budget: f64) -> Instance {
    Instance::builder(1, 1, 1, 1)
        .demand(vec![vec![10]])
        .transport_cost(vec![vec![vec![2.0]]])
        .capacity(vec![10])
        .opening_cost(vec![vec![5.0]])
        .budget(vec![budget])
        .operating_cost(vec![0.0])
        .build()
        .unwrap()
}

// Value vector for the unit instance: q_0_0_0 = 10, y_0_0_0 = 1.
const UNIT_POINT: [f64; 2] = [10.0, 1.0];

fn satisfied(constraint: &siteopt::Constraint, values: &[f64]) -> bool {
    let lhs = constraint.expr.evaluate(values);
    match constraint.comparison {
        Comparison::LessThanOrEqual => lhs <= constraint.rhs + 1e-9,
        Comparison::Equal => (lhs - constraint.rhs).abs() < 1e-9,
        Comparison::GreaterThanOrEqual => lhs >= constraint.rhs - 1e-9,
    }
}

#[test]
fn unit_formulation_structure() {
    let problem = siteopt::formulate(&unit_instance(100.0)).unwrap();

    assert_eq!(problem.num_variables(), 2);
    assert_eq!(problem.num_constraints(), 5);
    assert_eq!(problem.num_binary_variables(), 1);

    let names: Vec<&str> = problem.constraints.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "demand_0_0",
            "capacity_0_0",
            "activation_0_0_0",
            "budget_0",
            "single_level_0_0",
        ]
    );
}

#[test]
fn known_optimum_satisfies_every_constraint() {
    let problem = siteopt::formulate(&unit_instance(100.0)).unwrap();

    for constraint in &problem.constraints {
        assert!(
            satisfied(constraint, &UNIT_POINT),
            "constraint {} violated by the known optimum",
            constraint.name
        );
    }
    // demand-weighted transport (10 * 2 * 1.0) plus opening cost 5
    assert_eq!(problem.objective.expr.evaluate(&UNIT_POINT), 25.0);
}

#[test]
fn tight_budget_cuts_off_the_only_serving_plan() {
    let problem = siteopt::formulate(&unit_instance(4.0)).unwrap();

    let budget = problem
        .constraints
        .iter()
        .find(|c| c.name == "budget_0")
        .unwrap();
    assert!(!satisfied(budget, &UNIT_POINT));

    // with the site closed, shipping anything violates activation
    let closed = [10.0, 0.0];
    let activation = problem
        .constraints
        .iter()
        .find(|c| c.name == "activation_0_0_0")
        .unwrap();
    assert!(!satisfied(activation, &closed));
}

#[test]
fn planner_round_trips_an_optimal_outcome() {
    let planner = Planner::new(Arc::new(ScriptedSolver(SolveOutcome::Optimal(
        OptimalPoint {
            values: UNIT_POINT.to_vec(),
            objective_value: 25.0,
        },
    ))));

    let plan = planner.solve(&unit_instance(100.0)).unwrap();
    assert!(plan.feasible);
    assert_eq!(plan.objective_value, Some(25.0));
    assert_eq!(plan.assignments.len(), 1);
    assert_eq!(plan.assignments[0].client, 0);
    assert_eq!(plan.assignments[0].site, 0);
    assert_eq!(plan.assignments[0].period, 0);
    assert_eq!(plan.assignments[0].quantity, 10.0);
    assert_eq!(plan.open_level(0, 0), Some(0));
    assert_eq!(plan.total_shipped(), 10.0);
}

#[test]
fn planner_reports_infeasibility_as_a_plan() {
    let planner = Planner::new(Arc::new(ScriptedSolver(SolveOutcome::Infeasible)));
    let plan = planner.solve(&unit_instance(4.0)).unwrap();
    assert!(!plan.feasible);
    assert!(plan.assignments.is_empty());
}
