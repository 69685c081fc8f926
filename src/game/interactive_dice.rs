//! Manual dice entry for people rolling physical dice
//!
//! Prompts for the two values that came up and reads them from a line of
//! input. Reads from stdin in the CLI; any `BufRead` works, which keeps the
//! source testable.

use crate::core::{DiceRoll, InvalidRoll};
use crate::game::dice_source::DiceSource;
use crate::game::GameSnapshot;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// A dice source that asks a person for each roll
pub struct InteractiveDice<R, W> {
    input: R,
    output: W,
    /// Set once the input reaches end of file
    exhausted: bool,
}

impl InteractiveDice<BufReader<Stdin>, Stdout> {
    /// Read rolls from stdin, prompting on stdout
    pub fn stdio() -> Self {
        InteractiveDice::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveDice<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveDice {
            input,
            output,
            exhausted: false,
        }
    }

    /// Has the input been closed? No further rolls can be read.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn prompt(&mut self, view: &GameSnapshot) {
        let _ = write!(
            self.output,
            "Inning {}, {} batting. Enter dice (e.g. '3 5'): ",
            view.inning, view.current_team
        );
        let _ = self.output.flush();
    }

    /// Split a line into die values, accepting spaces and commas
    pub fn parse_line(line: &str) -> Result<Vec<u8>, InvalidRoll> {
        line.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| InvalidRoll::Unreadable(token.to_string()))
            })
            .collect()
    }
}

impl<R: BufRead, W: Write> DiceSource for InteractiveDice<R, W> {
    fn name(&self) -> &str {
        "manual"
    }

    fn acquire_dice(&mut self, view: &GameSnapshot) -> Result<(u8, u8), InvalidRoll> {
        self.prompt(view);

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.exhausted = true;
                return Err(InvalidRoll::NoDice);
            }
            Ok(_) => {}
            Err(e) => return Err(InvalidRoll::Unreadable(e.to_string())),
        }

        let values = Self::parse_line(&line)?;
        DiceRoll::from_values(&values).map(|roll| roll.as_pair())
    }
}
