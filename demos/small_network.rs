// Example: planning a small distribution network
//
// Three clients, two candidate sites, two capacity levels, two periods.
//
//            Demand (units)        Site capacities
// Client  | Period 1 | Period 2    Level 1: 40 units
// --------|----------|---------    Level 2: 80 units
//    A    |    20    |    30
//    B    |    15    |    10       Opening a site costs its level's
//    C    |     0    |    25       fee plus a flat per-period charge,
//                                  all within a per-period budget.
//
// The planner decides which sites to open at which level each period
// and how to route every unit of demand at minimum total cost.

use siteopt::{Instance, Planner, SolverFactory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let instance = Instance::builder(3, 2, 2, 2)
        .demand(vec![vec![20, 30], vec![15, 10], vec![0, 25]])
        .transport_cost(vec![
            vec![vec![1.0, 1.0], vec![4.0, 4.0]],
            vec![vec![3.0, 3.5], vec![1.5, 1.5]],
            vec![vec![2.0, 2.0], vec![2.5, 2.0]],
        ])
        .capacity(vec![40, 80])
        .opening_cost(vec![vec![12.0, 14.0], vec![20.0, 24.0]])
        .budget(vec![60.0, 70.0])
        .operating_cost(vec![2.0, 3.0])
        .build()?;

    let planner = Planner::new(SolverFactory::default_solver());
    println!("Solving with {}...\n", planner.solver_name());

    let plan = planner.solve(&instance)?;
    if !plan.feasible {
        println!("No feasible plan.");
        return Ok(());
    }

    if let Some(cost) = plan.objective_value {
        println!("Optimal cost: {cost:.2}");
    }
    for t in 0..instance.periods {
        println!("\nPeriod {}:", t + 1);
        for open in plan.open_sites.iter().filter(|o| o.period == t) {
            println!(
                "  site {} open at level {} ({} units, {:.2} shipped)",
                open.site + 1,
                open.level + 1,
                instance.capacity[open.level],
                plan.shipped_to(open.site, t)
            );
        }
        for a in plan.assignments.iter().filter(|a| a.period == t) {
            println!(
                "  client {} receives {:.2} units from site {}",
                a.client + 1,
                a.quantity,
                a.site + 1
            );
        }
    }

    Ok(())
}
