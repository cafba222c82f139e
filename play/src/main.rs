use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Args;
use log::{info, LevelFilter};
use mimalloc::MiMalloc;
use nim::{Action, Game, Player};
use nim_agent::{config::AgentConfig, train_with, Agent, Policy};
use rand::thread_rng;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;

fn main() -> Result<()> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, LevelFilter::Info)
            .with_context(|| format!("could not open log file {}", path.display()))?,
        None => simple_logging::log_to_stderr(LevelFilter::Info),
    }

    args.validate()?;
    let agent = get_agent(&args)?;
    let human = if args.ai_first { Player::One } else { Player::Zero };
    let mut game = Game::new(args.piles.clone());
    let mut rng = thread_rng();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.is_over() {
        println!("\n{game}");

        if game.to_move() == human {
            print!("Your move (pile:count): ");
            io::stdout().flush()?;
            let input = match lines.next() {
                Some(line) => line?,
                None => bail!("got EOF before the game ended"),
            };
            let action = match input.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    println!("Could not read move: {err}");
                    continue;
                }
            };
            // Illegal moves leave the game untouched, so just ask again.
            if let Err(err) = game.play(action) {
                println!("Illegal move: {err}");
            }
        } else {
            let action = agent.choose_action(game.piles(), false, &mut rng)?;
            println!("AI takes {} from pile {}", action.count(), action.pile());
            game.play(action)?;
        }
    }

    println!("\n{game}");
    match game.winner() {
        Some(winner) if winner == human => println!("You win!"),
        Some(_) => println!("The AI wins!"),
        None => println!("There was nothing to play."),
    }
    Ok(())
}

fn get_agent(args: &Args) -> Result<Agent> {
    if args.model_path.exists() || args.train_episodes == 0 {
        return Agent::load_or_default(&args.model_path, AgentConfig::default())
            .with_context(|| format!("couldn't load agent at {}", args.model_path.display()));
    }

    info!("training a new agent for {} games", args.train_episodes);
    let agent = train_with(
        args.train_episodes,
        AgentConfig::default(),
        &args.piles,
        &mut thread_rng(),
    )?;
    agent
        .save(&args.model_path)
        .with_context(|| format!("couldn't save agent to {}", args.model_path.display()))?;
    Ok(agent)
}
