use anyhow::{ensure, Context, Result};
use clap::Parser;
use cli::Args;
use log::{info, warn, LevelFilter};
use mimalloc::MiMalloc;
use nim_agent::{
    config::{AgentConfig, WIN_RATE_THRESHOLD},
    pit::pit,
    train_agent,
    train_parallel,
    Agent,
    RandomPolicy,
};
use rand::{random, rngs::StdRng, SeedableRng};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, level)
            .with_context(|| format!("could not open log file {}", path.display()))?,
        None => simple_logging::log_to_stderr(level),
    }

    args.validate()?;

    let config = AgentConfig {
        learning_rate: args.learning_rate,
        epsilon: args.epsilon,
    };
    let seed = args.seed.unwrap_or_else(random);
    info!("training on piles {} with seed {seed}", args.piles);

    let agent = if args.workers > 1 {
        ensure!(
            args.model_path.is_none(),
            "resuming an agent is only supported with a single worker"
        );
        train_parallel(args.episodes, args.workers, config, &args.piles, seed)?
    } else {
        let mut agent = match &args.model_path {
            Some(path) => Agent::load(path).with_context(|| format!("couldn't load agent at {}", path.display()))?,
            None => Agent::new(config),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let summary = train_agent(&mut agent, args.episodes, &args.piles, &mut rng)?;
        info!(
            "{} episodes, {:.2} plies on average, wins {:?}",
            summary.episodes,
            summary.average_plies(),
            summary.wins
        );
        agent
    };

    if args.pit_games > 0 {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let results = pit(&agent, &RandomPolicy, args.pit_games, &args.piles, &mut rng)?;
        info!("win rate against a random player: {:.3}", results.win_rate());
        if results.win_rate() < WIN_RATE_THRESHOLD {
            warn!("agent is weak, consider training for more episodes");
        }
    }

    agent
        .save(&args.output)
        .with_context(|| format!("couldn't save agent to {}", args.output.display()))?;
    Ok(())
}
