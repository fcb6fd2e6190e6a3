use std::env;
use std::fs;

use siteopt::{Instance, PlanSolution, Planner, SolverBackend, SolverFactory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or("usage: siteopt <instance.json> [auto|cbc|highs]")?;
    let backend = match args.next().as_deref() {
        None | Some("auto") => SolverBackend::Auto,
        Some("cbc") => SolverBackend::CoinCbc,
        Some("highs") => SolverBackend::Highs,
        Some(other) => return Err(format!("unknown backend `{other}`").into()),
    };

    let instance: Instance = serde_json::from_str(&fs::read_to_string(&path)?)?;
    instance.validate()?;

    let planner = Planner::new(SolverFactory::from_backend(backend));
    println!(
        "Planning {} clients, {} sites, {} levels, {} periods with {}",
        instance.clients,
        instance.sites,
        instance.levels,
        instance.periods,
        planner.solver_name()
    );

    let plan = planner.solve(&instance)?;
    print_plan(&instance, &plan);
    Ok(())
}

fn print_plan(instance: &Instance, plan: &PlanSolution) {
    if !plan.feasible {
        println!("No feasible plan: demand cannot be met within capacity and budget.");
        return;
    }

    if let Some(cost) = plan.objective_value {
        println!("Optimal cost: {cost:.2}");
    }

    for t in 0..instance.periods {
        println!("\nPeriod {}:", t + 1);
        for open in plan.open_sites.iter().filter(|o| o.period == t) {
            println!(
                "  site {} open at level {} (capacity {})",
                open.site + 1,
                open.level + 1,
                instance.capacity[open.level]
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
}
