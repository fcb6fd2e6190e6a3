// Domain layer: problem data, MILP model types, solver contract
pub mod domain;

// Application layer: formulation, extraction, and the planning pipeline
pub mod application;

// Solver adapters: concrete implementations of MilpSolver
#[cfg(feature = "solvers")]
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Assignment, Comparison, Constraint, Instance, InstanceBuilder, InstanceError, LinearExpr,
    MilpProblem, MilpSolver, Objective, ObjectiveSense, OpenSite, OptimalPoint, PlanSolution,
    SolveOutcome, SolverBackend, SolverError, VarId, Variable, VariableType, OPEN_THRESHOLD,
    QUANTITY_TOLERANCE,
};

pub use application::{extract, formulate, Planner, SolveFailure, VariableLayout};

#[cfg(feature = "solvers")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
