//! Human player that reads moves from a text stream.
//!
//! The console adapter: the player prints the board and the side to move,
//! then reads a line of four numbers `from_row from_col to_row to_col`. A
//! move onto the promotion row asks a second question for the piece letter
//! (`q`, `r`, `b` or `n`).
//!
//! # Input Handling
//!
//! - **End of input** or `resign`: the player gives up (`Ok(None)`)
//! - **Malformed line**: a message is printed and the question repeats
//! - **Not the player's piece / illegal destination**: same
//!
//! Reading from any [`LineReader`] keeps the player testable with scripted input.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};

use log::debug;

use super::player::Player;
use crate::error::Result;
use crate::game_repr::{Board, Color, Move, Square, Type};

/// Line-oriented input of a console player
pub trait LineReader {
    /// Appends the next line to `buf`, returning 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks stdin for one line at a time, so several players can read from it.
impl LineReader for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineReader for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<Stdin, Stdout> {
    /// Player on the process' stdin and stdout
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(io::stdin(), io::stdout(), name)
    }
}

impl<R: LineReader, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            name: name.into(),
        }
    }

    /// Gives the output back, mostly so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next non-empty line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    fn ask_promotion(&mut self) -> Result<Option<Type>> {
        loop {
            write!(self.output, "Promote to (q/r/b/n): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let choice = line
                .chars()
                .next()
                .and_then(Type::from_symbol)
                .filter(|t| t.is_promotion_choice());
            match choice {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "'{line}' is not a promotion piece")?,
            }
        }
    }
}

/// Parses `r c r c`, commas allowed as separators.
fn parse_squares(line: &str) -> Option<(Square, Square)> {
    let numbers: Vec<i8> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect::<Option<_>>()?;
    match numbers.as_slice() {
        &[fr, fc, tr, tc] => Some((Square::new(fr, fc), Square::new(tr, tc))),
        _ => None,
    }
}

impl<R: LineReader, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board, color: Color) -> Result<Option<Move>> {
        let legal = board.legal_moves_for(color)?;

        loop {
            write!(self.output, "{board}{color:?} to move (from_row from_col to_row to_col): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("[{}] input closed", self.name);
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("resign") {
                return Ok(None);
            }

            let Some((from, to)) = parse_squares(&line) else {
                writeln!(self.output, "Could not read '{line}', expected four numbers")?;
                continue;
            };

            let own_piece = board
                .occupant(from)
                .filter(|(_, piece)| piece.is(color))
                .map(|(id, _)| id);
            let Some(piece) = own_piece else {
                writeln!(self.output, "No {color:?} piece on {from}")?;
                continue;
            };

            let candidates: Vec<Move> = legal
                .iter()
                .copied()
                .filter(|mv| mv.piece == piece && mv.to == to)
                .collect();
            let Some(&first) = candidates.first() else {
                writeln!(self.output, "{from} -> {to} is not a legal move")?;
                continue;
            };

            if first.promotion.is_none() {
                return Ok(Some(first));
            }
            let Some(choice) = self.ask_promotion()? else {
                return Ok(None);
            };
            return Ok(candidates.into_iter().find(|mv| mv.promotion == Some(choice)));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
