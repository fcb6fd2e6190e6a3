// Domain module: problem data, MILP model types, and the solver contract

pub mod instance;
pub mod models;
pub mod solution;
pub mod solver_service;
pub mod value_objects;

pub use instance::*;
pub use models::*;
pub use solution::*;
pub use solver_service::*;
pub use value_objects::*;
