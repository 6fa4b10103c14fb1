//! Line-based console driver.
//!
//! A thin client of [`GameSession`]: it turns typed commands into
//! requests and draws the returned snapshots. All status wording lives
//! here, never in the game core.

mod keymap;

pub use keymap::Keymap;

use crate::games::tictactoe::{GameMode, Outcome, Player, Position, Square};
use crate::session::{GameSession, Snapshot};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a mark.
    Move(Position),
    /// Restart with the current mode.
    Restart,
    /// Restart with a new mode.
    Mode(GameMode),
    /// Show the command list.
    Help,
    /// Leave the console.
    Quit,
}

/// Parses one line of input; `None` for anything unrecognized.
pub fn parse_command(line: &str, keymap: Keymap) -> Option<ConsoleCommand> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_ascii_lowercase();
    match head.as_str() {
        "q" | "quit" | "exit" => Some(ConsoleCommand::Quit),
        "r" | "restart" => Some(ConsoleCommand::Restart),
        "h" | "help" | "?" => Some(ConsoleCommand::Help),
        "m" | "mode" => words.next()?.parse::<GameMode>().ok().map(ConsoleCommand::Mode),
        slot => slot
            .parse::<u8>()
            .ok()
            .and_then(|slot| keymap.to_position(slot))
            .map(ConsoleCommand::Move),
    }
}

/// Draws the board, with slot numbers on empty squares, and a status line.
pub fn render(snapshot: &Snapshot, keymap: Keymap) -> String {
    let board = snapshot.board();
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let symbol = match board.get(pos) {
                Square::Empty => keymap.slot_of(pos).to_string(),
                Square::Occupied(Player::X) => "X".to_string(),
                Square::Occupied(Player::O) => "O".to_string(),
            };
            out.push_str(&symbol);
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("-+-+-\n");
        }
    }
    out.push_str(&status_line(snapshot));
    out.push('\n');
    out
}

fn status_line(snapshot: &Snapshot) -> String {
    match (snapshot.outcome(), snapshot.active()) {
        (Some(Outcome::Winner(player)), _) => format!("Player {} wins!", player),
        (Some(Outcome::Draw), _) => "It's a draw!".to_string(),
        (None, true) => format!(
            "Player {}'s turn ({})",
            snapshot.current_player(),
            snapshot.mode()
        ),
        (None, false) => "Choose a mode: `m single` or `m two`".to_string(),
    }
}

const HELP: &str =
    "Commands: 1-9 place a mark, r restart, m single|two switch mode, h help, q quit";

/// Runs the console loop until `quit` or end of input.
#[instrument(skip_all, fields(keymap = %keymap))]
pub async fn run<R, W>(
    session: &mut GameSession,
    keymap: Keymap,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", HELP)?;
    write!(output, "{}", render(&session.snapshot(), keymap))?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line, keymap) else {
            debug!(line = %line, "Unrecognized input");
            writeln!(output, "{}", HELP)?;
            continue;
        };

        let snapshot = match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            ConsoleCommand::Restart => session.request_reset(),
            ConsoleCommand::Mode(mode) => session.request_mode_change(mode),
            ConsoleCommand::Move(pos) => match session.request_move(pos.to_index()) {
                Ok(snapshot) => snapshot,
                // Rejected moves are ignored, like a click on a taken cell.
                Err(_) => continue,
            },
        };
        write!(output, "{}", render(&snapshot, keymap))?;

        if session.computer_turn_pending() {
            writeln!(output, "Computer is thinking...")?;
            output.flush()?;
            if let Some(snapshot) = session.computer_reply().await {
                write!(output, "{}", render(&snapshot, keymap))?;
            }
        }
        output.flush()?;
    }

    info!("Console closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("q", Keymap::RowMajor), Some(ConsoleCommand::Quit));
        assert_eq!(parse_command(" R ", Keymap::RowMajor), Some(ConsoleCommand::Restart));
        assert_eq!(
            parse_command("m single", Keymap::RowMajor),
            Some(ConsoleCommand::Mode(GameMode::SinglePlayer))
        );
        assert_eq!(
            parse_command("5", Keymap::RowMajor),
            Some(ConsoleCommand::Move(Position::Center))
        );
        assert_eq!(
            parse_command("1", Keymap::Numpad),
            Some(ConsoleCommand::Move(Position::BottomLeft))
        );
        assert_eq!(parse_command("0", Keymap::RowMajor), None);
        assert_eq!(parse_command("m chess", Keymap::RowMajor), None);
        assert_eq!(parse_command("", Keymap::RowMajor), None);
    }

    #[test]
    fn test_render_fresh_board() {
        let mut session = GameSession::default();
        let snapshot = session.request_mode_change(GameMode::TwoPlayer);
        let text = render(&snapshot, Keymap::RowMajor);
        assert!(text.starts_with("1|2|3\n-+-+-\n4|5|6\n"));
        assert!(text.ends_with("Player X's turn (two-player)\n"));
    }

    #[test]
    fn test_render_before_mode_selected() {
        let session = GameSession::default();
        let text = render(&session.snapshot(), Keymap::Numpad);
        assert!(text.starts_with("7|8|9\n"));
        assert!(text.contains("Choose a mode"));
    }
}
