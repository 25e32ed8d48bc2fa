//! # Waygraph Demo Driver
//!
//! Builds a seeded random navigation graph, runs a few route queries, and
//! walks a simulated agent along one of the returned plans.

use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waygraph::{NavGraph, NavResult, SearchOutcome, Vec2};

/// Command line arguments for the waygraph demo.
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(about = "Waypoint navigation graph with A* route planning")]
#[command(version)]
struct Args {
    /// Random seed for graph generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of waypoints to place
    #[arg(long, default_value_t = 40)]
    waypoints: usize,

    /// Nearest neighbors to link each waypoint to
    #[arg(long, default_value_t = 3)]
    degree: usize,

    /// Number of route queries to run
    #[arg(long, default_value_t = 5)]
    queries: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> NavResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("waygraph v{} demo, seed {}", waygraph::VERSION, args.seed);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = generate_graph(&mut rng, args.waypoints, args.degree)?;
    info!(
        "generated graph: {} waypoints, {} links",
        graph.len(),
        graph.link_count()
    );

    let mut last_plan = None;
    for i in 0..args.queries {
        let from = random_position(&mut rng);
        let to = random_position(&mut rng);
        match graph.find_path(from, to)? {
            SearchOutcome::Route(plan) => {
                info!(
                    "query {i}: {from} -> {to}: {} waypoints, cost {:.2}",
                    plan.len(),
                    plan.cost()
                );
                last_plan = Some(plan);
            }
            SearchOutcome::AlreadyThere => {
                info!("query {i}: {from} -> {to}: both snap to the same waypoint");
            }
            SearchOutcome::NoPath => {
                warn!("query {i}: {from} -> {to}: unreachable");
            }
        }
    }

    if let Some(plan) = last_plan {
        walk_plan(plan);
    }

    Ok(())
}

fn initialize_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Scatters waypoints in a 100x100 box and links each to its nearest
/// neighbors, the usual shape of a hand-authored patrol graph.
fn generate_graph(rng: &mut StdRng, count: usize, degree: usize) -> NavResult<NavGraph> {
    let mut graph = NavGraph::new();
    let ids: Vec<_> = (0..count)
        .map(|_| graph.add_waypoint(random_position(rng), 1.0))
        .collect();

    for &id in &ids {
        let here = graph.get_waypoint(id)?.position();
        let mut others: Vec<_> = ids.iter().copied().filter(|&o| o != id).collect();
        others.sort_by(|&x, &y| {
            let dx = graph.get_waypoint(x).map(|w| w.position().distance_squared(here));
            let dy = graph.get_waypoint(y).map(|w| w.position().distance_squared(here));
            dx.unwrap_or(f32::MAX).total_cmp(&dy.unwrap_or(f32::MAX))
        });
        for &near in others.iter().take(degree) {
            let already_linked = graph
                .neighbors(id)?
                .iter()
                .any(|&(other, _)| other == near);
            if !already_linked {
                graph.link_default(id, near)?;
            }
        }
    }
    Ok(graph)
}

fn random_position(rng: &mut StdRng) -> Vec2 {
    Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0))
}

/// Moves a point agent along the plan at fixed speed, polling the cursor
/// each tick the way a movement controller would.
fn walk_plan(mut plan: waygraph::RoutePlan) {
    let Some(mut agent) = plan.current_position() else {
        return;
    };
    let speed: f32 = 0.5;
    let mut ticks = 0u32;

    while !plan.at_end() && ticks < 10_000 {
        if let Some(target) = plan.current_position() {
            let dist = agent.distance(target);
            if dist > 0.0 {
                let step = speed.min(dist);
                agent = Vec2::new(
                    agent.x + (target.x - agent.x) / dist * step,
                    agent.y + (target.y - agent.y) / dist * step,
                );
            }
        }
        plan.check_for_next_node(agent);
        ticks += 1;
    }

    if plan.at_end() {
        info!("agent completed the route in {ticks} ticks");
    } else {
        warn!("agent did not finish the route within {ticks} ticks");
    }
}
