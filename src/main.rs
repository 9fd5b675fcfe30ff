use anyhow::{Context, Result};
use tracing::{info, warn};
use workout_planner::{config, optimizer::WorkoutPlanner, report::PlanReport, telemetry};

use config::Config;
use telemetry::init_tracing;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    init_tracing(&cfg.logging);

    let planners: Vec<WorkoutPlanner> = cfg
        .strategies
        .iter()
        .copied()
        .map(WorkoutPlanner::new)
        .collect();
    info!(trials = cfg.trials.len(), strategies = ?cfg.strategies, "starting workout planner");

    for (n, trial) in cfg.trials.iter().enumerate() {
        if n > 0 {
            println!();
        }
        println!("{}", trial.name);

        let catalog = trial.group.exercises();
        for planner in &planners {
            match planner.plan(&catalog, trial.minutes) {
                Ok(result) => {
                    info!(
                        trial = %trial.name,
                        group = %trial.group,
                        strategy = planner.label(),
                        total_calories = result.total_calories,
                        "plan ready"
                    );
                    let rendered = PlanReport::new(planner.label(), &result)
                        .render(cfg.output)
                        .context("failed to render plan")?;
                    println!("{rendered}");
                }
                Err(err) => {
                    warn!(trial = %trial.name, strategy = planner.label(), error = %err, "trial skipped");
                    println!("{}: {err}", planner.label());
                }
            }
        }
    }

    Ok(())
}
