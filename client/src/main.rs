mod args;
mod command;
mod config;
mod feedback;
mod offline;
mod render;

use clap::Parser;
use std::time::Duration;
use tictactoe_common::games::SessionRng;
use tictactoe_common::logger::{self, LogTarget};
use tictactoe_common::log;
use tictactoe_common::version::VERSION;

use args::Args;
use config::get_config_manager;
use feedback::TerminalFeedback;
use offline::{RunnerOptions, run_tictactoe_game};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);

    let prefix = if config.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::Stderr);
    log!("tictactoe_client {}", VERSION);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let options = RunnerOptions {
        settings: config.tictactoe.session_settings(),
        bot_delay: Duration::from_millis(config.tictactoe.bot_delay_ms),
    };
    let mut rng = SessionRng::from_optional_seed(args.seed);
    let mut feedback = TerminalFeedback::new(std::io::stdout(), true);
    let mut stdout = std::io::stdout();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());

    let score = run_tictactoe_game(stdin, &mut stdout, &mut feedback, &mut rng, &options).await?;
    println!("{}", score);

    Ok(())
}
