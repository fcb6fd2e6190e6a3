// Domain service interface for MILP solver backends
// Defines the contract the planning pipeline relies on; backends are opaque oracles

use super::models::MilpProblem;

/// Error types for solver backends
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    #[error("solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// A complete optimal assignment returned by a backend
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalPoint {
    /// One value per problem variable, in variable order.
    pub values: Vec<f64>,
    /// Objective value at this point.
    pub objective_value: f64,
}

/// Outcome of a successful solve call.
///
/// Infeasibility is a legitimate answer, not an error; backend faults
/// travel on the `Err` channel as [`SolverError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// Proven optimal solution.
    Optimal(OptimalPoint),
    /// No assignment satisfies all constraints.
    Infeasible,
}

/// Interface for mixed-integer linear programming backends.
///
/// Implementations translate a [`MilpProblem`] into their native API,
/// run the optimization as one blocking call, and report exactly one of
/// optimal, infeasible, or a backend fault. Swapping backends never
/// changes the planning logic.
pub trait MilpSolver: Send + Sync {
    /// Solve a problem to optimality.
    fn solve(&self, problem: &MilpProblem) -> Result<SolveOutcome>;

    /// Validate a problem without solving it.
    fn validate(&self, problem: &MilpProblem) -> Result<()> {
        problem.validate().map_err(SolverError::InvalidProblem)
    }

    /// Name of this solver backend.
    fn name(&self) -> &str;

    /// Whether this backend supports mixed-integer programming.
    fn supports_mip(&self) -> bool;
}
