use super::value_objects::{Comparison, ObjectiveSense, VariableType};

/// Handle to a decision variable within one [`MilpProblem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub usize);

/// Decision variable in a formulated program
#[derive(Debug, Clone)]
pub struct Variable {
    pub var_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub name: String,
}

impl Variable {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            var_type: VariableType::Continuous,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            var_type: VariableType::Binary,
            lower_bound: 0.0,
            upper_bound: Some(1.0),
            name: name.into(),
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.var_type, VariableType::Binary)
    }
}

/// Sparse linear expression over problem variables.
///
/// Stored as `(variable, coefficient)` terms; a variable may appear at
/// most once. Term order follows insertion order and is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    pub terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Appends a term, skipping zero coefficients.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        if coefficient != 0.0 {
            self.terms.push((var, coefficient));
        }
    }

    pub fn term(mut self, var: VarId, coefficient: f64) -> Self {
        self.add_term(var, coefficient);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `var`, or zero if absent.
    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms
            .iter()
            .find(|(v, _)| *v == var)
            .map_or(0.0, |(_, c)| *c)
    }

    /// Evaluates the expression against a full value vector.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|(v, c)| c * values[v.0]).sum()
    }
}

/// Linear constraint `expr <comparison> rhs`
#[derive(Debug, Clone)]
pub struct Constraint {
    pub comparison: Comparison,
    pub expr: LinearExpr,
    pub rhs: f64,
    pub name: String,
}

impl Constraint {
    pub fn new(comparison: Comparison, expr: LinearExpr, rhs: f64) -> Self {
        Self {
            comparison,
            expr,
            rhs,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Linear objective function
#[derive(Debug, Clone)]
pub struct Objective {
    pub sense: ObjectiveSense,
    pub expr: LinearExpr,
}

impl Objective {
    pub fn minimize(expr: LinearExpr) -> Self {
        Self {
            sense: ObjectiveSense::Minimize,
            expr,
        }
    }

    pub fn maximize(expr: LinearExpr) -> Self {
        Self {
            sense: ObjectiveSense::Maximize,
            expr,
        }
    }
}

/// Complete mixed-integer linear program.
///
/// A solver-agnostic description: variables with bounds, one linear
/// objective, and a list of sparse linear constraints. Built once per
/// solve and handed to a [`MilpSolver`](super::MilpSolver).
#[derive(Debug, Clone)]
pub struct MilpProblem {
    pub name: String,
    pub variables: Vec<Variable>,
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
}

impl MilpProblem {
    /// Creates an empty problem with a zero objective.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            objective: Objective::minimize(LinearExpr::new()),
            constraints: Vec::new(),
        }
    }

    /// Adds a variable and returns its handle.
    pub fn add_variable(&mut self, variable: Variable) -> VarId {
        self.variables.push(variable);
        VarId(self.variables.len() - 1)
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_binary_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_binary_variables() > 0
    }

    /// Validates internal consistency.
    ///
    /// Checks that every referenced variable exists, every coefficient
    /// and bound is finite, and no lower bound exceeds its upper bound.
    pub fn validate(&self) -> Result<(), String> {
        for (i, var) in self.variables.iter().enumerate() {
            if !var.lower_bound.is_finite() {
                return Err(format!("variable `{}` has non-finite lower bound", var.name));
            }
            if let Some(upper) = var.upper_bound {
                if !upper.is_finite() {
                    return Err(format!("variable `{}` has non-finite upper bound", var.name));
                }
                if var.lower_bound > upper {
                    return Err(format!(
                        "variable {i} `{}` has lower bound ({}) > upper bound ({upper})",
                        var.name, var.lower_bound
                    ));
                }
            }
        }

        self.check_expr(&self.objective.expr, "objective")?;
        for constraint in &self.constraints {
            self.check_expr(&constraint.expr, &constraint.name)?;
            if !constraint.rhs.is_finite() {
                return Err(format!(
                    "constraint `{}` has non-finite right-hand side",
                    constraint.name
                ));
            }
        }
        Ok(())
    }

    fn check_expr(&self, expr: &LinearExpr, context: &str) -> Result<(), String> {
        for &(var, coefficient) in &expr.terms {
            if var.0 >= self.variables.len() {
                return Err(format!("undefined variable id {} in `{context}`", var.0));
            }
            if !coefficient.is_finite() {
                return Err(format!(
                    "non-finite coefficient on `{}` in `{context}`",
                    self.variables[var.0].name
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_constructors() {
        let q = Variable::continuous("q_0_0_0");
        assert_eq!(q.var_type, VariableType::Continuous);
        assert_eq!(q.lower_bound, 0.0);
        assert!(q.upper_bound.is_none());
        assert!(!q.is_integer());

        let y = Variable::binary("y_0_0_0");
        assert_eq!(y.var_type, VariableType::Binary);
        assert_eq!(y.upper_bound, Some(1.0));
        assert!(y.is_integer());

        let bounded = Variable::continuous("slack").with_bounds(1.0, Some(4.0));
        assert_eq!(bounded.lower_bound, 1.0);
        assert_eq!(bounded.upper_bound, Some(4.0));
    }

    #[test]
    fn expr_skips_zero_terms() {
        let expr = LinearExpr::new()
            .term(VarId(0), 2.0)
            .term(VarId(1), 0.0)
            .term(VarId(2), -1.5);
        assert_eq!(expr.terms.len(), 2);
        assert_eq!(expr.coefficient(VarId(0)), 2.0);
        assert_eq!(expr.coefficient(VarId(1)), 0.0);
        assert_eq!(expr.evaluate(&[1.0, 10.0, 2.0]), -1.0);
    }

    #[test]
    fn problem_bookkeeping() {
        let mut problem = MilpProblem::new("test");
        let x = problem.add_variable(Variable::continuous("x"));
        let b = problem.add_variable(Variable::binary("b"));
        problem.set_objective(Objective::minimize(
            LinearExpr::new().term(x, 1.0).term(b, 5.0),
        ));
        problem.add_constraint(
            Constraint::new(
                Comparison::GreaterThanOrEqual,
                LinearExpr::new().term(x, 1.0),
                3.0,
            )
            .with_name("floor"),
        );

        assert_eq!(problem.num_variables(), 2);
        assert_eq!(problem.num_constraints(), 1);
        assert_eq!(problem.num_binary_variables(), 1);
        assert!(problem.is_mixed_integer());
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn validate_rejects_undefined_variable() {
        let mut problem = MilpProblem::new("test");
        problem.add_variable(Variable::continuous("x"));
        problem.add_constraint(Constraint::new(
            Comparison::Equal,
            LinearExpr::new().term(VarId(7), 1.0),
            0.0,
        ));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let mut problem = MilpProblem::new("test");
        problem.add_variable(Variable::continuous("x").with_bounds(5.0, Some(1.0)));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_rhs() {
        let mut problem = MilpProblem::new("test");
        let x = problem.add_variable(Variable::continuous("x"));
        problem.add_constraint(Constraint::new(
            Comparison::LessThanOrEqual,
            LinearExpr::new().term(x, 1.0),
            f64::INFINITY,
        ));
        assert!(problem.validate().is_err());
    }
}
