//! Text notation.
//!
//! Actions are written `pile:count` (or `pile count`) and piles as
//! comma separated counts, e.g. `1,3,5,7`.

use std::{fmt::Display, str::FromStr};

use crate::{action::Action, error::ParseError, game::Game, piles::Piles};

/// Piles longer than this are drawn cut short, the count is always shown.
const MAX_BAR: u32 = 16;

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s
            .split(|c: char| c == ':' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let pile = parse_number(parts.next().ok_or(ParseError::Empty)?)?;
        let count = parse_number(parts.next().ok_or_else(|| ParseError::MissingCount(s.to_string()))?)?;
        if let Some(rest) = parts.next() {
            return Err(ParseError::TrailingInput(rest.to_string()));
        }
        Action::new(pile, count)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.pile(), self.count())
    }
}

impl FromStr for Piles {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let counts = s.split(',').map(parse_number).collect::<Result<Vec<u32>, _>>()?;
        Piles::new(&counts)
    }
}

impl Display for Piles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = self.iter().map(|count| count.to_string()).collect::<Vec<_>>();
        write!(f, "{}", counts.join(","))
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (pile, count) in self.piles.iter().enumerate() {
            let bar = "|".repeat(count.min(MAX_BAR) as usize);
            writeln!(f, "{pile:>2}: {bar:<width$} ({count})", width = 8)?;
        }
        match self.winner {
            Some(winner) => write!(f, "{winner} wins"),
            None if self.piles.is_terminal() => write!(f, "no moves are possible"),
            None => write!(f, "{} to move", self.to_move),
        }
    }
}
