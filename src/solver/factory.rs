use crate::domain::solver_service::MilpSolver;
use crate::domain::value_objects::SolverBackend;
use crate::solver::{CoinCbcSolver, HighsSolver};
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend
    pub fn from_backend(backend: SolverBackend) -> Arc<dyn MilpSolver> {
        match backend {
            SolverBackend::Auto => Arc::new(HighsSolver::new()),
            SolverBackend::CoinCbc => Arc::new(CoinCbcSolver::new()),
            SolverBackend::Highs => Arc::new(HighsSolver::new()),
        }
    }

    /// Get the default solver (HiGHS)
    pub fn default_solver() -> Arc<dyn MilpSolver> {
        Arc::new(HighsSolver::new())
    }
}
