// HiGHS solver adapter
// Translates the domain MILP description to the HiGHS row-problem API

use crate::domain::{
    models::MilpProblem,
    solver_service::{MilpSolver, OptimalPoint, Result, SolveOutcome, SolverError},
    value_objects::{Comparison, ObjectiveSense, VariableType},
};

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for HighsSolver {
    fn solve(&self, problem: &MilpProblem) -> Result<SolveOutcome> {
        self.validate(problem)?;

        use highs::{HighsModelStatus, RowProblem, Sense};

        // HiGHS takes objective coefficients at column creation time
        let mut objective = vec![0.0; problem.num_variables()];
        for &(var, coefficient) in &problem.objective.expr.terms {
            objective[var.0] += coefficient;
        }

        let mut pb = RowProblem::default();
        let mut cols = Vec::with_capacity(problem.num_variables());

        for (i, var) in problem.variables.iter().enumerate() {
            let lower = var.lower_bound;
            let upper = var.upper_bound.unwrap_or(f64::INFINITY);

            let col = match var.var_type {
                VariableType::Binary => pb.add_integer_column(objective[i], lower..upper),
                VariableType::Continuous => pb.add_column(objective[i], lower..upper),
            };
            cols.push(col);
        }

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .expr
                .terms
                .iter()
                .map(|&(var, coefficient)| (cols[var.0], coefficient))
                .collect();

            match constraint.comparison {
                Comparison::LessThanOrEqual => {
                    pb.add_row(..=constraint.rhs, &terms);
                }
                Comparison::Equal => {
                    pb.add_row(constraint.rhs..=constraint.rhs, &terms);
                }
                Comparison::GreaterThanOrEqual => {
                    pb.add_row(constraint.rhs.., &terms);
                }
            }
        }

        let sense = if problem.objective.sense == ObjectiveSense::Maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let solved = pb.optimise(sense).solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                // Report the objective from our own coefficients, not
                // the backend's accounting
                let objective_value = problem.objective.expr.evaluate(&values);
                Ok(SolveOutcome::Optimal(OptimalPoint {
                    values,
                    objective_value,
                }))
            }
            HighsModelStatus::Infeasible => Ok(SolveOutcome::Infeasible),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
