//! Command-line grammar of the interactive loop.

use std::str::FromStr;

use thiserror::Error;

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `c <n>`: top n centers by average separation, bottom |n| if negative.
    Centers(i64),
    /// `d <low> <high>`: actors by in-degree range.
    Degrees {
        /// Lower bound, inclusive.
        low: usize,
        /// Upper bound, inclusive.
        high: usize,
    },
    /// `i`: actors with infinite separation from the center.
    Infinite,
    /// `p <name>`: path from an actor to the center.
    Path(String),
    /// `s <low> <high>`: actors by separation range.
    Separation {
        /// Lower bound, inclusive.
        low: usize,
        /// Upper bound, inclusive.
        high: usize,
    },
    /// `u <name>`: make an actor the center of the universe.
    Recenter(String),
    /// `h` or `?`: list commands.
    Help,
    /// `q`: leave the loop.
    Quit,
}

/// Why a line did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[error("empty command")]
    Empty,
    /// First token is not a known command.
    #[error("unknown command '{0}'")]
    Unknown(String),
    /// Required argument absent.
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        /// The command letter.
        command: char,
        /// Description of the expected arguments.
        expected: &'static str,
    },
    /// Argument is not a number in range.
    #[error("'{value}' is not a valid {expected}")]
    InvalidNumber {
        /// The offending token.
        value: String,
        /// What was expected.
        expected: &'static str,
    },
}

/// Usage text shown by `h` and after parse errors.
pub const USAGE: &str = "\
Commands:
c <#>: list top (positive number) or bottom (negative) <#> centers of the universe, sorted by average separation
d <low> <high>: list actors sorted by degree, with degree between low and high
i: list actors with infinite separation from the current center
p <name>: find path from <name> to current center of the universe
s <low> <high>: list actors sorted by non-infinite separation from the current center, with separation between low and high
u <name>: make <name> the center of the universe
q: quit game";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head {
            "" => Err(ParseError::Empty),
            "c" => {
                let token = first_token(rest, 'c', "a count")?;
                let n = token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                    value: token.to_string(),
                    expected: "count",
                })?;
                Ok(Command::Centers(n))
            }
            "d" => {
                let (low, high) = bounds(rest, 'd')?;
                Ok(Command::Degrees { low, high })
            }
            "s" => {
                let (low, high) = bounds(rest, 's')?;
                Ok(Command::Separation { low, high })
            }
            "i" => Ok(Command::Infinite),
            "p" => name(rest, 'p').map(Command::Path),
            "u" => name(rest, 'u').map(Command::Recenter),
            "h" | "?" => Ok(Command::Help),
            "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn first_token<'a>(rest: &'a str, command: char, expected: &'static str) -> Result<&'a str, ParseError> {
    rest.split_whitespace()
        .next()
        .ok_or(ParseError::MissingArgument { command, expected })
}

fn bounds(rest: &str, command: char) -> Result<(usize, usize), ParseError> {
    let mut tokens = rest.split_whitespace();
    let mut next_bound = || -> Result<usize, ParseError> {
        let token = tokens.next().ok_or(ParseError::MissingArgument {
            command,
            expected: "<low> <high>",
        })?;
        token.parse::<usize>().map_err(|_| ParseError::InvalidNumber {
            value: token.to_string(),
            expected: "non-negative bound",
        })
    };
    let low = next_bound()?;
    let high = next_bound()?;
    Ok((low, high))
}

/// Names run to the end of the line and may contain spaces.
fn name(rest: &str, command: char) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument {
            command,
            expected: "an actor name",
        })
    } else {
        Ok(rest.to_string())
    }
}
