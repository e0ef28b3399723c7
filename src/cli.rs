use crate::board::{MoveRecord, Square};
use crate::game::{Game, SelectAction};
use crate::movegen::GameStatus;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub struct CliHandler {
    game: Game,
}

impl CliHandler {
    pub fn new() -> Self {
        CliHandler { game: Game::new() }
    }

    /// Reads commands from stdin until "quit" or end of input, printing
    /// each command's response.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut reader = stdin.lock();
        let mut line = String::new();

        while reader.read_line(&mut line)? > 0 {
            let command = line.trim();
            if command == "quit" {
                break;
            }
            let response = self.handle_command(command)?;
            print!("{}", response);
            stdout.flush()?;
            line.clear();
        }
        Ok(())
    }

    pub fn handle_command(&mut self, command: &str) -> Result<String> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        if parts.is_empty() {
            return Ok("".to_string());
        }

        match parts[0] {
            "new" => {
                self.game.reset();
                Ok(self.game.board().to_string())
            }
            "board" => Ok(self.game.board().to_string()),
            "status" => Ok(self.handle_status()),
            "moves" => Ok(self.handle_moves(&parts[1..])),
            "quit" => Ok("".to_string()),
            square => Ok(self.handle_select(square)),
        }
    }

    fn handle_status(&self) -> String {
        match self.game.status() {
            GameStatus::Checkmate(winner) => format!("checkmate, {} wins\n", winner),
            GameStatus::InProgress => {
                if self.game.is_in_check(self.game.turn()) {
                    format!("{} to move, in check\n", self.game.turn())
                } else {
                    format!("{} to move\n", self.game.turn())
                }
            }
        }
    }

    fn handle_moves(&self, parts: &[&str]) -> String {
        let square = parts
            .first()
            .and_then(|s| parse_square(s))
            .and_then(|(file, rank)| Square::new(file, rank));
        let square = match square {
            Some(square) => square,
            None => return "".to_string(),
        };

        let moves = self.game.legal_moves_from(square);
        if moves.is_empty() {
            format!("no moves from {}\n", format_square(square))
        } else {
            let targets: Vec<String> = moves.iter().map(|&sq| format_square(sq)).collect();
            format!("{}\n", targets.join(" "))
        }
    }

    /// A bare square name feeds the selection state machine: first click
    /// arms a piece, second click moves it or drops the selection.
    fn handle_select(&mut self, input: &str) -> String {
        let (file, rank) = match parse_square(input) {
            Some(coords) => coords,
            None => return "".to_string(),
        };

        match self.game.select_square(file, rank) {
            Ok(action) => self.describe_action(action),
            Err(err) => format!("{}\n", err),
        }
    }

    fn describe_action(&self, action: SelectAction) -> String {
        match action {
            SelectAction::Idle => "".to_string(),
            SelectAction::Armed { square, moves } => {
                if moves.is_empty() {
                    format!("armed {}\n", format_square(square))
                } else {
                    let targets: Vec<String> =
                        moves.iter().map(|&sq| format_square(sq)).collect();
                    format!("armed {}: {}\n", format_square(square), targets.join(" "))
                }
            }
            SelectAction::Disarmed => "disarmed\n".to_string(),
            SelectAction::Played { record, status } => self.describe_play(record, status),
        }
    }

    fn describe_play(&self, record: MoveRecord, status: GameStatus) -> String {
        let mut line = format!(
            "moved {}{}",
            format_square(record.from),
            format_square(record.to)
        );
        if let Some(captured) = record.captured {
            line.push_str(&format!(", captured {}", captured.kind.name()));
        }
        if record.promoted {
            line.push_str(", promoted to queen");
        }
        line.push('\n');

        match status {
            GameStatus::Checkmate(winner) => {
                line.push_str(&format!("checkmate, {} wins\n", winner));
            }
            GameStatus::InProgress => {
                if self.game.is_in_check(self.game.turn()) {
                    line.push_str(&format!("{} is in check\n", self.game.turn()));
                } else {
                    line.push_str(&format!("{} to move\n", self.game.turn()));
                }
            }
        }
        line
    }
}

fn parse_square(input: &str) -> Option<(i8, i8)> {
    let bytes = input.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')? as i8;
    let rank = bytes[1].checked_sub(b'1')? as i8;
    if file < 8 && rank < 8 {
        Some((file, rank))
    } else {
        None
    }
}

fn format_square(square: Square) -> String {
    let mut result = String::new();
    result.push((b'a' + square.file() as u8) as char);
    result.push((b'1' + square.rank() as u8) as char);
    result
}
