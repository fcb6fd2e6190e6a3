// COIN-OR CBC solver adapter, via the good_lp modeling layer

use crate::domain::{
    models::MilpProblem,
    solver_service::{MilpSolver, OptimalPoint, Result, SolveOutcome, SolverError},
    value_objects::{Comparison, ObjectiveSense, VariableType},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for CoinCbcSolver {
    fn solve(&self, problem: &MilpProblem) -> Result<SolveOutcome> {
        self.validate(problem)?;

        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::with_capacity(problem.num_variables());

        for var_def in &problem.variables {
            let lower = var_def.lower_bound;

            let var = match var_def.var_type {
                VariableType::Binary => {
                    let upper = var_def.upper_bound.unwrap_or(1.0);
                    vars.add(variable().integer().min(lower).max(upper))
                }
                VariableType::Continuous => {
                    let def = variable().min(lower);
                    match var_def.upper_bound {
                        Some(upper) => vars.add(def.max(upper)),
                        None => vars.add(def),
                    }
                }
            };
            lp_variables.push(var);
        }

        // good_lp minimizes, so negate coefficients for maximization
        let is_maximize = problem.objective.sense == ObjectiveSense::Maximize;
        let mut obj_expr: Expression = 0.into();
        for &(var, coefficient) in &problem.objective.expr.terms {
            let c = if is_maximize { -coefficient } else { coefficient };
            obj_expr += c * lp_variables[var.0];
        }

        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for &(var, coefficient) in &constraint.expr.terms {
                lhs += coefficient * lp_variables[var.0];
            }

            match constraint.comparison {
                Comparison::LessThanOrEqual => {
                    lp_model = lp_model.with(lhs.leq(constraint.rhs));
                }
                Comparison::Equal => {
                    lp_model = lp_model.with(lhs.eq(constraint.rhs));
                }
                Comparison::GreaterThanOrEqual => {
                    lp_model = lp_model.with(lhs.geq(constraint.rhs));
                }
            }
        }

        match lp_model.solve() {
            Ok(sol) => {
                let values: Vec<f64> = lp_variables.iter().map(|&var| sol.value(var)).collect();
                // Report the objective from our own coefficients, not
                // the backend's accounting
                let objective_value = problem.objective.expr.evaluate(&values);
                Ok(SolveOutcome::Optimal(OptimalPoint {
                    values,
                    objective_value,
                }))
            }
            Err(ResolutionError::Infeasible) => Ok(SolveOutcome::Infeasible),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
