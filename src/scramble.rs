//! Character-substitution "decoding" animation.
//!
//! Each tick resolves one third of a character. Positions below the resolved
//! count show the target character; everything else is drawn at random from
//! [`SCRAMBLE_ALPHABET`].

use fastrand::Rng;

pub const SCRAMBLE_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#$%&";
pub const SCRAMBLE_TICK_MS: u32 = 30;
const TICKS_PER_CHARACTER: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Scramble {
    target: Vec<char>,
    resolved_thirds: usize,
}

impl Scramble {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            resolved_thirds: 0,
        }
    }

    /// Starts over with a new target, or the same one if unchanged.
    pub fn restart(&mut self, target: &str) {
        *self = Self::new(target);
    }

    pub fn resolved(&self) -> usize {
        (self.resolved_thirds / TICKS_PER_CHARACTER).min(self.target.len())
    }

    pub fn is_finished(&self) -> bool {
        self.resolved() >= self.target.len()
    }

    /// Moves the counter forward by one tick. Returns `false` once there is
    /// nothing left to resolve, at which point the caller stops ticking.
    pub fn advance(&mut self) -> bool {
        if !self.is_finished() {
            self.resolved_thirds += 1;
        }
        !self.is_finished()
    }

    pub fn frame(&self, rng: &mut Rng) -> String {
        let alphabet = SCRAMBLE_ALPHABET.as_bytes();
        let resolved = self.resolved();

        self.target
            .iter()
            .enumerate()
            .map(|(index, &letter)| {
                if index < resolved {
                    letter
                } else {
                    char::from(alphabet[rng.usize(..alphabet.len())])
                }
            })
            .collect()
    }
}
