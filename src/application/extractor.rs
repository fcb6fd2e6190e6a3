// Extraction: map a raw solver result back to the domain-level plan

use crate::domain::instance::Instance;
use crate::domain::solution::{Assignment, OpenSite, PlanSolution, OPEN_THRESHOLD, QUANTITY_TOLERANCE};
use crate::domain::solver_service::SolveOutcome;

use super::layout::VariableLayout;

/// Turns a solve outcome into a [`PlanSolution`].
///
/// For an optimal outcome the value vector must cover the instance's
/// full variable layout (the planner enforces this before calling).
/// Shipments at or below [`QUANTITY_TOLERANCE`] are dropped as solver
/// noise; opening variables count as open above [`OPEN_THRESHOLD`].
/// Records are emitted in lexicographic index order.
pub fn extract(instance: &Instance, outcome: &SolveOutcome) -> PlanSolution {
    let point = match outcome {
        SolveOutcome::Infeasible => return PlanSolution::infeasible(),
        SolveOutcome::Optimal(point) => point,
    };

    let layout = VariableLayout::new(instance);

    let mut assignments = Vec::new();
    for i in 0..instance.clients {
        for j in 0..instance.sites {
            for t in 0..instance.periods {
                let quantity = point.values[layout.shipment(i, j, t).0];
                if quantity > QUANTITY_TOLERANCE {
                    assignments.push(Assignment {
                        client: i,
                        site: j,
                        period: t,
                        quantity,
                    });
                }
            }
        }
    }

    let mut open_sites = Vec::new();
    for j in 0..instance.sites {
        for k in 0..instance.levels {
            for t in 0..instance.periods {
                if point.values[layout.opening(j, k, t).0] > OPEN_THRESHOLD {
                    open_sites.push(OpenSite {
                        site: j,
                        level: k,
                        period: t,
                    });
                }
            }
        }
    }

    PlanSolution::optimal(point.objective_value, assignments, open_sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solver_service::OptimalPoint;

    fn instance() -> Instance {
        Instance::builder(2, 2, 1, 1)
            .demand(vec![vec![10], vec![5]])
            .transport_cost(vec![vec![vec![1.0], vec![2.0]], vec![vec![3.0], vec![4.0]]])
            .capacity(vec![20])
            .opening_cost(vec![vec![7.0]])
            .budget(vec![100.0])
            .operating_cost(vec![0.0])
            .build()
            .unwrap()
    }

    #[test]
    fn infeasible_maps_to_infeasible_plan() {
        let plan = extract(&instance(), &SolveOutcome::Infeasible);
        assert!(!plan.feasible);
        assert!(plan.objective_value.is_none());
    }

    #[test]
    fn filters_noise_and_rounds_openings() {
        let instance = instance();
        // layout: q_0_0_0, q_0_1_0, q_1_0_0, q_1_1_0, y_0_0_0, y_1_0_0
        let point = OptimalPoint {
            values: vec![10.0, 4.0e-4, 5.0, -1.0e-9, 1.0, 0.0],
            objective_value: 32.0,
        };
        let plan = extract(&instance, &SolveOutcome::Optimal(point));

        assert!(plan.feasible);
        assert_eq!(plan.objective_value, Some(32.0));
        assert_eq!(
            plan.assignments,
            vec![
                Assignment {
                    client: 0,
                    site: 0,
                    period: 0,
                    quantity: 10.0,
                },
                Assignment {
                    client: 1,
                    site: 0,
                    period: 0,
                    quantity: 5.0,
                },
            ]
        );
        assert_eq!(
            plan.open_sites,
            vec![OpenSite {
                site: 0,
                level: 0,
                period: 0,
            }]
        );
    }

    #[test]
    fn near_threshold_binary_values() {
        let instance = instance();
        let point = OptimalPoint {
            values: vec![10.0, 0.0, 5.0, 0.0, 0.49, 0.51],
            objective_value: 0.0,
        };
        let plan = extract(&instance, &SolveOutcome::Optimal(point));
        assert_eq!(plan.open_sites.len(), 1);
        assert_eq!(plan.open_sites[0].site, 1);
    }
}
