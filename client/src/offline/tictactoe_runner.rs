use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    GameMode, Outcome, ScoreBoard, TicTacToeGameState, TicTacToeSessionSettings,
};
use tictactoe_common::log;

use crate::command::{HELP_TEXT, PlayerCommand, parse_command};
use crate::feedback::OutcomeObserver;
use crate::render::render_board;

pub struct RunnerOptions {
    pub settings: TicTacToeSessionSettings,
    pub bot_delay: Duration,
}

/// Plays games until the player quits or input ends. Returns the session tally.
pub async fn run_tictactoe_game<R, W, O>(
    input: R,
    output: &mut W,
    observer: &mut O,
    rng: &mut SessionRng,
    options: &RunnerOptions,
) -> std::io::Result<ScoreBoard>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    O: OutcomeObserver,
{
    let mut game = TicTacToeGameState::new(&options.settings);
    let mut score = ScoreBoard::default();
    let mut lines = input.lines();

    log!(
        "Session started: mode {:?}, difficulty {:?}, seed {}",
        game.mode(),
        game.difficulty(),
        rng.seed()
    );
    writeln!(output, "{}", HELP_TEXT)?;
    show_state(output, &game)?;

    loop {
        if game.is_bot_turn() {
            if !options.bot_delay.is_zero() {
                tokio::time::sleep(options.bot_delay).await;
            }
            match game.apply_bot_move(rng) {
                Ok(index) => {
                    log!("Bot ({:?}) played cell {}", game.difficulty(), index + 1);
                    after_move(output, observer, &game, &mut score)?;
                }
                Err(e) => {
                    log!("Bot failed to move: {}", e);
                    break;
                }
            }
            continue;
        }

        output.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            PlayerCommand::Place(index) => match game.place_mark(index) {
                Ok(_) => after_move(output, observer, &game, &mut score)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            PlayerCommand::Reset => {
                game.reset();
                show_state(output, &game)?;
            }
            PlayerCommand::ToggleMode => {
                game.set_mode(game.mode().toggled());
                log!("Mode switched to {:?}", game.mode());
                show_state(output, &game)?;
            }
            PlayerCommand::ToggleDifficulty => {
                game.set_difficulty(game.difficulty().toggled());
                log!("Difficulty switched to {:?}", game.difficulty());
                writeln!(output, "Difficulty: {:?}", game.difficulty())?;
            }
            PlayerCommand::ShowScore => writeln!(output, "{}", score)?,
            PlayerCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
            PlayerCommand::Quit => break,
        }
    }

    log!("Session finished after {} games: {}", score.games_played(), score);
    output.flush()?;
    Ok(score)
}

fn after_move<W: Write, O: OutcomeObserver>(
    output: &mut W,
    observer: &mut O,
    game: &TicTacToeGameState,
    score: &mut ScoreBoard,
) -> std::io::Result<()> {
    show_state(output, game)?;

    let outcome = game.outcome();
    if outcome.is_terminal() {
        score.record(outcome);
        log!("Game over: {}", outcome);
        observer.on_game_over(outcome, score);
        writeln!(output, "Press r to play again.")?;
    }
    Ok(())
}

fn show_state<W: Write>(output: &mut W, game: &TicTacToeGameState) -> std::io::Result<()> {
    let winning_line = game.winning_line();
    writeln!(output)?;
    writeln!(output, "{}", render_board(game.board(), winning_line.as_ref()))?;
    if game.outcome() == Outcome::InProgress {
        let who = match game.mode() {
            GameMode::PlayerVsBot if game.is_bot_turn() => "Bot is thinking...".to_string(),
            _ => format!("{} to move", game.current_mark()),
        };
        writeln!(output, "{}", who)?;
    }
    Ok(())
}
