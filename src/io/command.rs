//! Parsing of one script line into a typed command
//!
//! Tokens are separated by whitespace. Everything the plane receives is
//! already typed, so every validation happens here.

use std::num::{IntErrorKind, ParseIntError};
use std::str::{FromStr, SplitWhitespace};

use crate::io::configuration::{COMMENT_PREFIX, DIRECTION_SEPARATOR};
use crate::io::error::{InterpreterError, Result, invalid_parameter};
use crate::spatial::{Direction, Position};

/// A single interpreter command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `C x y color intensity`: light a tile, or switch it off with intensity 0
    Color {
        /// Target position
        position: Position,
        /// Color label
        color: String,
        /// Intensity, 0 meaning off
        intensity: u32,
    },
    /// `S x y`: switch a tile off
    Erase {
        /// Target position
        position: Position,
    },
    /// `? x y`: report a tile's color and intensity
    Query {
        /// Target position
        position: Position,
    },
    /// `r result k1 c1 k2 c2 ...`: append a rule
    AddRule {
        /// Color applied when the rule fires
        result: String,
        /// `(color, minimum count)` pairs in written order
        conditions: Vec<(String, u32)>,
    },
    /// `s`: print the rules in evaluation order
    PrintRules,
    /// `b x y` and `B x y`: total intensity of a block
    Block {
        /// Seed position
        position: Position,
        /// Restrict the block to the seed's color (`B`)
        same_color_only: bool,
    },
    /// `p x y`: propagate at one tile
    Propagate {
        /// Target position
        position: Position,
    },
    /// `P x y`: propagate over a whole block
    PropagateBlock {
        /// Seed position
        position: Position,
    },
    /// `o`: reorder rules by usage
    Reorder,
    /// `t x y d1,d2,...`: follow a sequence of moves
    Trace {
        /// Start position
        start: Position,
        /// Moves in order
        moves: Vec<Direction>,
    },
    /// `L x1 y1 x2 y2`: shortest lit path length
    Length {
        /// First endpoint
        from: Position,
        /// Second endpoint
        to: Position,
    },
    /// `q`: stop processing
    Quit,
}

impl Command {
    /// Parse one line; blank lines and comments yield `Ok(None)`
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command, a missing or surplus argument,
    /// an unparsable or out-of-range number, or an unknown direction token
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            return Ok(None);
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let command = match name {
            "C" => {
                let mut args = Arguments::new("C", tokens);
                let position = args.position()?;
                let color = args.word("color")?;
                let intensity = args.unsigned("intensity")?;
                args.finish()?;
                Self::Color {
                    position,
                    color,
                    intensity,
                }
            }
            "S" => Self::Erase {
                position: Arguments::new("S", tokens).position_only()?,
            },
            "?" => Self::Query {
                position: Arguments::new("?", tokens).position_only()?,
            },
            "r" => parse_rule(tokens)?,
            "s" => {
                Arguments::new("s", tokens).finish()?;
                Self::PrintRules
            }
            "b" => Self::Block {
                position: Arguments::new("b", tokens).position_only()?,
                same_color_only: false,
            },
            "B" => Self::Block {
                position: Arguments::new("B", tokens).position_only()?,
                same_color_only: true,
            },
            "p" => Self::Propagate {
                position: Arguments::new("p", tokens).position_only()?,
            },
            "P" => Self::PropagateBlock {
                position: Arguments::new("P", tokens).position_only()?,
            },
            "o" => {
                Arguments::new("o", tokens).finish()?;
                Self::Reorder
            }
            "t" => {
                let mut args = Arguments::new("t", tokens);
                let start = args.position()?;
                let moves = parse_moves(&args.word("moves")?)?;
                args.finish()?;
                Self::Trace { start, moves }
            }
            "L" => {
                let mut args = Arguments::new("L", tokens);
                let from = args.position()?;
                let to = args.position()?;
                args.finish()?;
                Self::Length { from, to }
            }
            "q" => Self::Quit,
            other => {
                return Err(InterpreterError::UnknownCommand {
                    name: other.to_owned(),
                });
            }
        };

        Ok(Some(command))
    }
}

/// Comma-separated direction tokens, e.g. `NN,EE,SO`
///
/// # Errors
///
/// Returns an error naming the first token that is not a direction
pub fn parse_moves(text: &str) -> Result<Vec<Direction>> {
    text.split(DIRECTION_SEPARATOR)
        .map(|token| {
            Direction::from_token(token).ok_or_else(|| InterpreterError::UnknownDirection {
                token: token.to_owned(),
            })
        })
        .collect()
}

fn parse_rule(tokens: SplitWhitespace<'_>) -> Result<Command> {
    let mut args = Arguments::new("r", tokens);
    let result = args.word("result")?;

    let mut conditions = Vec::new();
    while let Some(count_token) = args.next_token() {
        let minimum = parse_unsigned("count", count_token)?;
        let color = args.word("color")?;
        conditions.push((color, minimum));
    }

    Ok(Command::AddRule { result, conditions })
}

fn parse_number<T>(argument: &'static str, token: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|error: ParseIntError| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            invalid_parameter(argument, &token, &"out of range")
        }
        _ => InterpreterError::InvalidInteger {
            argument,
            value: token.to_owned(),
        },
    })
}

fn parse_unsigned(argument: &'static str, token: &str) -> Result<u32> {
    let negative = token
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    if negative {
        return Err(invalid_parameter(argument, &token, &"must not be negative"));
    }
    parse_number(argument, token)
}

/// Cursor over the arguments of one command
struct Arguments<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Arguments<'a> {
    const fn new(command: &'static str, tokens: SplitWhitespace<'a>) -> Self {
        Self { command, tokens }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn required(&mut self, argument: &'static str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or(InterpreterError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn word(&mut self, argument: &'static str) -> Result<String> {
        self.required(argument).map(str::to_owned)
    }

    fn number<T: FromStr<Err = ParseIntError>>(&mut self, argument: &'static str) -> Result<T> {
        let token = self.required(argument)?;
        parse_number(argument, token)
    }

    fn unsigned(&mut self, argument: &'static str) -> Result<u32> {
        let token = self.required(argument)?;
        parse_unsigned(argument, token)
    }

    fn position(&mut self) -> Result<Position> {
        let x = self.number("x")?;
        let y = self.number("y")?;
        Ok(Position::new(x, y))
    }

    fn position_only(mut self) -> Result<Position> {
        let position = self.position()?;
        self.finish()?;
        Ok(position)
    }

    fn finish(mut self) -> Result<()> {
        match self.tokens.next() {
            Some(token) => Err(InterpreterError::UnexpectedArgument {
                command: self.command,
                token: token.to_owned(),
            }),
            None => Ok(()),
        }
    }
}
