// Application module: the instance → formulation → solve → extraction pipeline

pub mod extractor;
pub mod formulator;
pub mod layout;
pub mod planner;

pub use extractor::extract;
pub use formulator::formulate;
pub use layout::VariableLayout;
pub use planner::{Planner, SolveFailure};
