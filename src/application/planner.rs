// Planning service: formulate, solve, extract as one pipeline

use std::sync::Arc;

use crate::domain::instance::Instance;
use crate::domain::solution::PlanSolution;
use crate::domain::solver_service::{MilpSolver, SolveOutcome, SolverError};

use super::extractor::extract;
use super::formulator::formulate;

/// Error of the planning pipeline.
///
/// Infeasibility is not represented here; an infeasible instance comes
/// back as `Ok(PlanSolution { feasible: false, .. })`.
#[derive(Debug, thiserror::Error)]
pub enum SolveFailure {
    /// The instance violated its own invariants (bad shape or
    /// coefficient domain). Unreachable for builder-produced instances.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// The solver backend reported a fault.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Facility location planner over a pluggable solver backend.
///
/// Each [`solve`](Planner::solve) call formulates a fresh program,
/// runs the backend as one blocking call, and extracts the plan; no
/// state is carried between calls.
pub struct Planner {
    solver: Arc<dyn MilpSolver>,
}

impl Planner {
    pub fn new(solver: Arc<dyn MilpSolver>) -> Self {
        Self { solver }
    }

    /// Name of the underlying solver backend.
    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Plans one instance end to end.
    pub fn solve(&self, instance: &Instance) -> Result<PlanSolution, SolveFailure> {
        let problem = formulate(instance)?;
        let outcome = self.solver.solve(&problem)?;

        if let SolveOutcome::Optimal(point) = &outcome {
            if point.values.len() != problem.num_variables() {
                return Err(SolverError::ExecutionFailed(format!(
                    "backend `{}` returned {} values for {} variables",
                    self.solver.name(),
                    point.values.len(),
                    problem.num_variables()
                ))
                .into());
            }
        }

        Ok(extract(instance, &outcome))
    }
}
