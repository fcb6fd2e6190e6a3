// Formulation: translate a validated instance into the facility location MILP

use crate::domain::instance::Instance;
use crate::domain::models::{Constraint, LinearExpr, MilpProblem, Objective, Variable};
use crate::domain::value_objects::Comparison;

use super::layout::VariableLayout;
use super::planner::SolveFailure;

/// Builds the mixed-integer program for an instance.
///
/// Variables: one continuous shipment variable per
/// `(client, site, period)` and one binary opening variable per
/// `(site, level, period)`, allocated in the order fixed by
/// [`VariableLayout`] so ids and diagnostic names are stable across
/// runs.
///
/// The instance is re-validated before any variable is allocated;
/// a builder-produced instance never fails here.
pub fn formulate(instance: &Instance) -> Result<MilpProblem, SolveFailure> {
    instance
        .validate()
        .map_err(|e| SolveFailure::MalformedInstance(e.to_string()))?;

    let layout = VariableLayout::new(instance);
    let mut problem = MilpProblem::new("multi-period facility location");

    // q[i][j][t]: quantity shipped from site j to client i in period t
    for i in 0..instance.clients {
        for j in 0..instance.sites {
            for t in 0..instance.periods {
                let id = problem.add_variable(Variable::continuous(format!("q_{i}_{j}_{t}")));
                debug_assert_eq!(id, layout.shipment(i, j, t));
            }
        }
    }

    // y[j][k][t]: site j opened at capacity level k in period t
    for j in 0..instance.sites {
        for k in 0..instance.levels {
            for t in 0..instance.periods {
                let id = problem.add_variable(Variable::binary(format!("y_{j}_{k}_{t}")));
                debug_assert_eq!(id, layout.opening(j, k, t));
            }
        }
    }

    problem.set_objective(Objective::minimize(objective_expr(instance, &layout)));

    // 1. Demand satisfaction: sum_j q[i][j][t] = demand[i][t]
    for i in 0..instance.clients {
        for t in 0..instance.periods {
            let mut expr = LinearExpr::new();
            for j in 0..instance.sites {
                expr.add_term(layout.shipment(i, j, t), 1.0);
            }
            problem.add_constraint(
                Constraint::new(Comparison::Equal, expr, instance.demand[i][t] as f64)
                    .with_name(format!("demand_{i}_{t}")),
            );
        }
    }

    // 2. Facility capacity: sum_i q[i][j][t] <= sum_k capacity[k] * y[j][k][t]
    for j in 0..instance.sites {
        for t in 0..instance.periods {
            let mut expr = LinearExpr::new();
            for i in 0..instance.clients {
                expr.add_term(layout.shipment(i, j, t), 1.0);
            }
            for k in 0..instance.levels {
                expr.add_term(layout.opening(j, k, t), -(instance.capacity[k] as f64));
            }
            problem.add_constraint(
                Constraint::new(Comparison::LessThanOrEqual, expr, 0.0)
                    .with_name(format!("capacity_{j}_{t}")),
            );
        }
    }

    // 3. Facility activation: q[i][j][t] <= demand[i][t] * sum_k y[j][k][t],
    // with the client's own demand as the big-M coefficient
    for i in 0..instance.clients {
        for j in 0..instance.sites {
            for t in 0..instance.periods {
                let mut expr = LinearExpr::new().term(layout.shipment(i, j, t), 1.0);
                for k in 0..instance.levels {
                    expr.add_term(layout.opening(j, k, t), -(instance.demand[i][t] as f64));
                }
                problem.add_constraint(
                    Constraint::new(Comparison::LessThanOrEqual, expr, 0.0)
                        .with_name(format!("activation_{i}_{j}_{t}")),
                );
            }
        }
    }

    // 4. Budget: sum_j sum_k (opening_cost[k][t] + operating_cost[t]) * y[j][k][t] <= budget[t]
    for t in 0..instance.periods {
        let mut expr = LinearExpr::new();
        for j in 0..instance.sites {
            for k in 0..instance.levels {
                expr.add_term(
                    layout.opening(j, k, t),
                    instance.opening_cost[k][t] + instance.operating_cost[t],
                );
            }
        }
        problem.add_constraint(
            Constraint::new(Comparison::LessThanOrEqual, expr, instance.budget[t])
                .with_name(format!("budget_{t}")),
        );
    }

    // 5. Single facility level: sum_k y[j][k][t] <= 1
    for j in 0..instance.sites {
        for t in 0..instance.periods {
            let mut expr = LinearExpr::new();
            for k in 0..instance.levels {
                expr.add_term(layout.opening(j, k, t), 1.0);
            }
            problem.add_constraint(
                Constraint::new(Comparison::LessThanOrEqual, expr, 1.0)
                    .with_name(format!("single_level_{j}_{t}")),
            );
        }
    }

    Ok(problem)
}

// Transportation cost is weighted by the client's demand in that
// period, matching the source model; facility cost is the opening cost
// of the chosen level plus the period's flat operating surcharge.
fn objective_expr(instance: &Instance, layout: &VariableLayout) -> LinearExpr {
    let mut expr = LinearExpr::new();
    for t in 0..instance.periods {
        for i in 0..instance.clients {
            for j in 0..instance.sites {
                expr.add_term(
                    layout.shipment(i, j, t),
                    instance.demand[i][t] as f64 * instance.transport_cost[i][j][t],
                );
            }
        }
        for j in 0..instance.sites {
            for k in 0..instance.levels {
                expr.add_term(
                    layout.opening(j, k, t),
                    instance.opening_cost[k][t] + instance.operating_cost[t],
                );
            }
        }
    }
    expr
}
