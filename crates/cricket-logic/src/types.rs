//! Core domain types for hand cricket.

use crate::game::EngineError;
use serde::{Deserialize, Serialize};

/// A side in the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The human at the keyboard.
    Player,
    /// The uniform-random opponent.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Parity the player calls on the toss sum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Parity of a sum of hand signs.
    pub fn of(sum: u8) -> Self {
        if sum % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Election made by whichever side wins the toss
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatOrBowl {
    Bat,
    Bowl,
}

/// A hand sign: one to six fingers
///
/// Both the toss and every ball use one sign per side. Construction
/// validates the range, so a sign in hand is always playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandSign(u8);

impl HandSign {
    /// Smallest legal sign.
    pub const MIN: u8 = 1;
    /// Largest legal sign.
    pub const MAX: u8 = 6;

    /// Validates and wraps a raw number.
    pub fn new(value: u8) -> Result<Self, EngineError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::SignOutOfRange(value))
        }
    }

    /// Wraps a value already known to be in range.
    pub(crate) fn new_unchecked(value: u8) -> Self {
        debug_assert!((Self::MIN..=Self::MAX).contains(&value));
        Self(value)
    }

    /// The number of fingers shown.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The sign's worth in runs when the batting side shows it.
    pub fn runs(self) -> u32 {
        u32::from(self.0)
    }
}

/// Terminal result of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// One side finished ahead of the other.
    Won(Side),
    /// The chase ended level with the target.
    Draw,
}

impl Verdict {
    /// Returns the winning side, if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Won(side) => Some(*side),
            Verdict::Draw => None,
        }
    }

    /// True if the match was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Verdict::Won(side) => write!(f, "{} wins", side),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_sign_range() {
        for n in 1..=6 {
            assert!(HandSign::new(n).is_ok(), "sign {} should be legal", n);
        }
        assert_eq!(HandSign::new(0), Err(EngineError::SignOutOfRange(0)));
        assert_eq!(HandSign::new(7), Err(EngineError::SignOutOfRange(7)));
        assert_eq!(HandSign::new(255), Err(EngineError::SignOutOfRange(255)));
    }

    #[test]
    fn test_hand_sign_runs() {
        for n in 1..=6 {
            let sign = HandSign::new(n).unwrap();
            assert_eq!(sign.value(), n);
            assert_eq!(sign.runs(), u32::from(n));
        }
    }

    #[test]
    fn test_parity_of_sum() {
        assert_eq!(Parity::of(2), Parity::Even);
        assert_eq!(Parity::of(7), Parity::Odd);
        for sum in 2..=12 {
            let expected = if sum % 2 == 0 { Parity::Even } else { Parity::Odd };
            assert_eq!(Parity::of(sum), expected);
        }
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::Player.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Player);
        for side in [Side::Player, Side::Computer] {
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_verdict_accessors() {
        assert_eq!(Verdict::Won(Side::Player).winner(), Some(Side::Player));
        assert_eq!(Verdict::Draw.winner(), None);
        assert!(Verdict::Draw.is_draw());
        assert!(!Verdict::Won(Side::Computer).is_draw());
        assert_eq!(Verdict::Won(Side::Computer).to_string(), "Computer wins");
        assert_eq!(Verdict::Draw.to_string(), "Draw");
    }
}
