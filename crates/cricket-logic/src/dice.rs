//! Injected randomness for the computer's draws.
//!
//! Every computer number (toss and ball) is an independent uniform pick
//! over 1..=6, and the bat-or-bowl election after a lost toss is a fair
//! coin. The engine never reaches for a global generator — callers hand
//! it a `Dice` implementation, so tests can script every draw.

use crate::types::{BatOrBowl, HandSign};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the computer's random choices
pub trait Dice {
    /// Uniform draw over the six hand signs.
    fn roll(&mut self) -> HandSign;

    /// Fair coin for the bat-or-bowl election.
    fn flip(&mut self) -> BatOrBowl;
}

/// Entropy-seeded dice for live play
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: SmallRng,
}

impl RandomDice {
    /// Creates dice seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates dice with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> HandSign {
        HandSign::new_unchecked(self.rng.gen_range(HandSign::MIN..=HandSign::MAX))
    }

    fn flip(&mut self) -> BatOrBowl {
        if self.rng.gen::<bool>() {
            BatOrBowl::Bat
        } else {
            BatOrBowl::Bowl
        }
    }
}

/// Dice that replay a fixed script
///
/// Rolls and flips are consumed front to back. Running past the end of
/// the script panics, which is the point: a test that draws more than it
/// queued is wrong. Not for live play.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
    flips: VecDeque<BatOrBowl>,
}

impl ScriptedDice {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues rolls to hand out in order.
    pub fn queue_rolls<I: IntoIterator<Item = u8>>(mut self, rolls: I) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queues coin flips to hand out in order.
    pub fn queue_flips<I: IntoIterator<Item = BatOrBowl>>(mut self, flips: I) -> Self {
        self.flips.extend(flips);
        self
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> HandSign {
        let raw = self.rolls.pop_front().expect("scripted dice ran out of rolls");
        HandSign::new(raw).expect("scripted roll outside 1..=6")
    }

    fn flip(&mut self) -> BatOrBowl {
        self.flips.pop_front().expect("scripted dice ran out of flips")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut dice = RandomDice::seeded(42);
        for _ in 0..1000 {
            let sign = dice.roll();
            assert!(sign.value() >= 1 && sign.value() <= 6, "roll {} out of range", sign.value());
        }
    }

    #[test]
    fn test_seeded_dice_reproduce() {
        let mut a = RandomDice::seeded(7);
        let mut b = RandomDice::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
            assert_eq!(a.flip(), b.flip());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = RandomDice::seeded(1);
        let mut b = RandomDice::seeded(2);
        let rolls_a: Vec<_> = (0..20).map(|_| a.roll()).collect();
        let rolls_b: Vec<_> = (0..20).map(|_| b.roll()).collect();
        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn test_every_sign_comes_up() {
        let mut dice = RandomDice::seeded(42);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[usize::from(dice.roll().value()) - 1] = true;
        }
        assert!(seen.iter().all(|s| *s), "not all signs drawn: {:?}", seen);
    }

    #[test]
    fn test_both_coin_faces_come_up() {
        let mut dice = RandomDice::seeded(42);
        let mut bat = false;
        let mut bowl = false;
        for _ in 0..100 {
            match dice.flip() {
                BatOrBowl::Bat => bat = true,
                BatOrBowl::Bowl => bowl = true,
            }
        }
        assert!(bat && bowl);
    }

    #[test]
    fn test_scripted_dice_replay_in_order() {
        let mut dice = ScriptedDice::new()
            .queue_rolls([3, 1, 6])
            .queue_flips([BatOrBowl::Bowl, BatOrBowl::Bat]);
        assert_eq!(dice.roll().value(), 3);
        assert_eq!(dice.flip(), BatOrBowl::Bowl);
        assert_eq!(dice.roll().value(), 1);
        assert_eq!(dice.roll().value(), 6);
        assert_eq!(dice.flip(), BatOrBowl::Bat);
    }

    #[test]
    #[should_panic(expected = "ran out of rolls")]
    fn test_scripted_dice_panic_when_dry() {
        let mut dice = ScriptedDice::new();
        dice.roll();
    }
}
