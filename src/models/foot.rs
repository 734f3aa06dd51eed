//! Foot identities.
//!
//! Events are assigned to a positional foot purely by detection order: the
//! first event after sorting is `Foot::One`, the next `Foot::Two`, and so on.
//! Which positional foot is anatomically left is only known once the operator
//! says so.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Foot {
    One,
    Two,
}

impl Foot {
    /// Parity assignment: even positions are foot one, odd positions foot two.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Foot::One
        } else {
            Foot::Two
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Foot::One => 1,
            Foot::Two => 2,
        }
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number(), f)
    }
}

/// Anatomical side given by the operator for positional foot one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FootSide {
    Left,
    Right,
}

impl FootSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            FootSide::Left => "left",
            FootSide::Right => "right",
        }
    }

    /// Accepts `l`/`L`/`r`/`R` and the full words.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" | "left" => Some(FootSide::Left),
            "r" | "right" => Some(FootSide::Right),
            _ => None,
        }
    }
}

/// One value per positional foot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootPair<T> {
    pub one: T,
    pub two: T,
}

impl<T> FootPair<T> {
    pub fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    pub fn get(&self, foot: Foot) -> &T {
        match foot {
            Foot::One => &self.one,
            Foot::Two => &self.two,
        }
    }

    pub fn get_mut(&mut self, foot: Foot) -> &mut T {
        match foot {
            Foot::One => &mut self.one,
            Foot::Two => &mut self.two,
        }
    }

    /// Exchange the two slots. Applying it twice is the identity.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.one, &mut self.two);
    }
}

/// Split `n` positional items into per-foot counts: foot one takes
/// `ceil(n / 2)`, foot two `floor(n / 2)`.
pub fn parity_split(n: usize) -> FootPair<usize> {
    FootPair::new((n + 1) / 2, n / 2)
}
