//! Toss resolution.
//!
//! Before play, each side throws one sign and the player calls odd or
//! even on the sum. Calling it right wins the toss and the right to elect
//! batting or bowling; a lost toss hands that election to the computer's
//! coin flip.

use crate::types::{BatOrBowl, HandSign, Parity};
use serde::{Deserialize, Serialize};

/// Progress through the toss phase
///
/// Each stage carries only the data the next operation needs, so calling
/// toss operations out of order is unrepresentable rather than checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TossStage {
    /// Waiting for the player to call odd or even.
    AwaitingParity,
    /// Parity called; waiting for the player's toss number.
    AwaitingNumber {
        /// The parity on record. It may be recalled until a number is thrown.
        parity: Parity,
    },
    /// Player won the toss; waiting for the bat-or-bowl election.
    AwaitingBatOrBowl {
        /// The resolved toss, kept for display until play starts.
        toss: TossResult,
    },
}

/// A resolved toss, ready for the caller to display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TossResult {
    /// Parity the player called.
    pub called: Parity,
    /// The player's toss number.
    pub player_number: HandSign,
    /// The computer's toss number.
    pub computer_number: HandSign,
    /// Sum of both numbers.
    pub sum: u8,
    /// Parity of the sum.
    pub sum_parity: Parity,
    /// True if the called parity matched the sum.
    pub player_won: bool,
    /// The computer's election, present exactly when the player lost.
    pub computer_choice: Option<BatOrBowl>,
}

/// Classifies a toss from the called parity and both numbers.
///
/// Pure arithmetic: the coin flip for a lost toss happens in the engine,
/// which fills in `computer_choice` afterwards.
pub fn resolve_toss(called: Parity, player: HandSign, computer: HandSign) -> TossResult {
    let sum = player.value() + computer.value();
    let sum_parity = Parity::of(sum);
    TossResult {
        called,
        player_number: player,
        computer_number: computer,
        sum,
        sum_parity,
        player_won: sum_parity == called,
        computer_choice: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(n: u8) -> HandSign {
        HandSign::new(n).unwrap()
    }

    #[test]
    fn test_even_call_three_plus_three_wins() {
        let toss = resolve_toss(Parity::Even, sign(3), sign(3));
        assert_eq!(toss.sum, 6);
        assert_eq!(toss.sum_parity, Parity::Even);
        assert!(toss.player_won);
        assert_eq!(toss.computer_choice, None);
    }

    #[test]
    fn test_all_combinations_classify_correctly() {
        for called in [Parity::Odd, Parity::Even] {
            for p in 1..=6 {
                for c in 1..=6 {
                    let toss = resolve_toss(called, sign(p), sign(c));
                    assert_eq!(toss.sum, p + c);
                    let expected = Parity::of(p + c) == called;
                    assert_eq!(
                        toss.player_won, expected,
                        "called {:?} with {}+{}",
                        called, p, c
                    );
                }
            }
        }
    }

    #[test]
    fn test_result_echoes_inputs() {
        let toss = resolve_toss(Parity::Odd, sign(2), sign(5));
        assert_eq!(toss.called, Parity::Odd);
        assert_eq!(toss.player_number.value(), 2);
        assert_eq!(toss.computer_number.value(), 5);
        assert_eq!(toss.sum_parity, Parity::Odd);
        assert!(toss.player_won);
    }
}
