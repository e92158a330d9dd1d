//! Lottery number generator: six distinct numbers out of 1..=45.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const HIGHEST_NUMBER: u8 = 45;
pub const NUMBERS_PER_DRAW: usize = 6;
/// Draws kept before the history has to be reset
pub const MAX_HISTORY: usize = 5;

/// Ball colour band, ten numbers per band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    Yellow,
    Blue,
    Red,
    Gray,
    Green,
}

impl BallColor {
    pub fn for_number(number: u8) -> Self {
        match number {
            0..=10 => BallColor::Yellow,
            11..=20 => BallColor::Blue,
            21..=30 => BallColor::Red,
            31..=40 => BallColor::Gray,
            _ => BallColor::Green,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BallColor::Yellow => "노랑",
            BallColor::Blue => "파랑",
            BallColor::Red => "빨강",
            BallColor::Gray => "회색",
            BallColor::Green => "초록",
        }
    }
}

/// One draw, sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw(Vec<u8>);

impl Draw {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers: Vec<u8> = index::sample(rng, usize::from(HIGHEST_NUMBER), NUMBERS_PER_DRAW)
            .into_iter()
            .filter_map(|i| u8::try_from(i + 1).ok())
            .collect();
        numbers.sort_unstable();
        Draw(numbers)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }

    pub fn colors(&self) -> Vec<BallColor> {
        self.0.iter().copied().map(BallColor::for_number).collect()
    }
}

/// Recent draws, newest first, capped at [`MAX_HISTORY`]
#[derive(Debug, Clone, Default)]
pub struct DrawHistory {
    draws: Vec<Draw>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full(&self) -> bool {
        self.draws.len() >= MAX_HISTORY
    }

    /// Draw a new set and record it. Returns `None` once the history is full.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Draw> {
        if self.is_full() {
            return None;
        }
        self.draws.insert(0, Draw::generate(rng));
        self.draws.first()
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn reset(&mut self) {
        self.draws.clear();
    }
}
