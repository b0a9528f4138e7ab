//! Match state machine for hand cricket.
//!
//! A match is a single value transformed by the operations below. The
//! caller feeds in a toss call, an election, or a ball number; the engine
//! applies the rules synchronously and returns what happened for the UI
//! to render. Presentation timing never touches outcomes: the result of a
//! ball is fixed the instant both numbers are known.

use crate::dice::Dice;
use crate::toss::{resolve_toss, TossResult, TossStage};
use crate::types::{BatOrBowl, HandSign, Parity, Side, Verdict};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// An operation the current state does not allow
///
/// A rejected call never mutates the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A number outside the six hand signs.
    #[error("hand sign {0} is outside 1..=6")]
    SignOutOfRange(u8),
    /// Toss number thrown before calling odd or even.
    #[error("call odd or even before throwing a toss number")]
    ParityNotChosen,
    /// Toss operation after the toss numbers were already drawn.
    #[error("the toss is already resolved")]
    TossAlreadyResolved,
    /// Bat-or-bowl election without a won toss pending.
    #[error("there is no bat-or-bowl election to make")]
    ElectionNotOpen,
    /// Ball played outside the playing phase.
    #[error("balls can only be played while the match is in progress")]
    NotPlaying,
}

/// Which operations are currently legal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-game toss, with its own sub-stages.
    Toss(TossStage),
    /// An innings is under way.
    Playing,
    /// The match is over; the verdict travels with the phase so the two
    /// can never disagree.
    Ended(Verdict),
}

/// Which innings is under way
///
/// The chase target only exists in the second innings, fixed at the
/// moment the first ends and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Innings {
    First,
    Second {
        /// Runs the first-innings batting side finished with.
        target: u32,
    },
}

impl Innings {
    /// 1 or 2, for display.
    pub fn number(&self) -> u8 {
        match self {
            Innings::First => 1,
            Innings::Second { .. } => 2,
        }
    }

    /// The chase target, if the second innings is under way.
    pub fn target(&self) -> Option<u32> {
        match self {
            Innings::First => None,
            Innings::Second { target } => Some(*target),
        }
    }
}

/// One ball: both numbers plus what it did to the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// The player's sign for this ball.
    pub player_number: HandSign,
    /// The computer's drawn sign.
    pub computer_number: HandSign,
    /// What the ball changed.
    pub event: DeliveryEvent,
}

/// Effect of a single ball
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryEvent {
    /// Numbers differed; the batting side scored its own number.
    Runs {
        /// The side that scored (always the batting side).
        side: Side,
        /// Runs added by this ball.
        runs: u32,
    },
    /// Matching numbers ended the first innings; the chase is on.
    InningsEnd {
        /// Score the dismissed side set for the chase.
        target: u32,
    },
    /// The ball ended the match, by an out or by passing the target.
    MatchEnd(Verdict),
}

/// Flat snapshot of the match for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub phase: Phase,
    pub innings: u8,
    pub batting: Side,
    pub player_score: u32,
    pub computer_score: u32,
    pub target: Option<u32>,
}

/// A live hand-cricket match
///
/// Created at the toss, mutated only through the operations below, and
/// returned to the identical initial state by [`Match::reset`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    phase: Phase,
    innings: Innings,
    batting: Side,
    player_score: u32,
    computer_score: u32,
}

impl Match {
    /// Creates a match waiting for the toss parity call.
    pub fn new() -> Self {
        Self {
            phase: Phase::Toss(TossStage::AwaitingParity),
            innings: Innings::First,
            batting: Side::Player,
            player_score: 0,
            computer_score: 0,
        }
    }

    /// Returns the match to its initial state. Always succeeds.
    pub fn reset(&mut self) {
        debug!("match reset");
        *self = Match::new();
    }

    // ── Toss ─────────────────────────────────────────────────────────

    /// Calls odd or even on the toss sum.
    ///
    /// Legal until a toss number is thrown; calling again before that
    /// overwrites the previous call.
    pub fn choose_parity(&mut self, parity: Parity) -> Result<(), EngineError> {
        match self.phase {
            Phase::Toss(TossStage::AwaitingParity)
            | Phase::Toss(TossStage::AwaitingNumber { .. }) => {
                debug!(?parity, "parity called");
                self.phase = Phase::Toss(TossStage::AwaitingNumber { parity });
                Ok(())
            }
            _ => Err(EngineError::TossAlreadyResolved),
        }
    }

    /// Throws the player's toss number and resolves the toss.
    ///
    /// Draws the computer's number, classifies the sum against the called
    /// parity, and either waits for the player's election (won toss) or
    /// flips the computer's coin and starts play (lost toss). The
    /// returned [`TossResult`] carries everything the caller displays.
    pub fn pick_toss_number(
        &mut self,
        number: HandSign,
        dice: &mut impl Dice,
    ) -> Result<TossResult, EngineError> {
        let called = match self.phase {
            Phase::Toss(TossStage::AwaitingNumber { parity }) => parity,
            Phase::Toss(TossStage::AwaitingParity) => return Err(EngineError::ParityNotChosen),
            _ => return Err(EngineError::TossAlreadyResolved),
        };

        let mut toss = resolve_toss(called, number, dice.roll());
        if toss.player_won {
            debug!(sum = toss.sum, "player won the toss");
            self.phase = Phase::Toss(TossStage::AwaitingBatOrBowl { toss });
        } else {
            // The computer's election is part of the toss result, not a
            // hidden follow-up step.
            let choice = dice.flip();
            toss.computer_choice = Some(choice);
            debug!(sum = toss.sum, ?choice, "computer won the toss");
            let batting = match choice {
                BatOrBowl::Bat => Side::Computer,
                BatOrBowl::Bowl => Side::Player,
            };
            self.start_play(batting);
        }
        Ok(toss)
    }

    /// Elects to bat or bowl after winning the toss.
    pub fn choose_bat_or_bowl(&mut self, choice: BatOrBowl) -> Result<(), EngineError> {
        match self.phase {
            Phase::Toss(TossStage::AwaitingBatOrBowl { .. }) => {
                let batting = match choice {
                    BatOrBowl::Bat => Side::Player,
                    BatOrBowl::Bowl => Side::Computer,
                };
                self.start_play(batting);
                Ok(())
            }
            _ => Err(EngineError::ElectionNotOpen),
        }
    }

    fn start_play(&mut self, batting: Side) {
        debug!(%batting, "first innings under way");
        self.batting = batting;
        self.phase = Phase::Playing;
    }

    // ── Play ─────────────────────────────────────────────────────────

    /// Plays one ball with the given player sign.
    ///
    /// Draws the computer's sign. Matching signs put the batting side
    /// out; otherwise the batting side scores its own number. In the
    /// second innings the chase ends the match the moment the batting
    /// side's score strictly exceeds the target.
    pub fn play_ball(
        &mut self,
        number: HandSign,
        dice: &mut impl Dice,
    ) -> Result<Delivery, EngineError> {
        if self.phase != Phase::Playing {
            return Err(EngineError::NotPlaying);
        }

        let computer = dice.roll();
        let event = if number == computer {
            self.dismissal()
        } else {
            let runs = match self.batting {
                Side::Player => number.runs(),
                Side::Computer => computer.runs(),
            };
            self.score(runs)
        };

        Ok(Delivery {
            player_number: number,
            computer_number: computer,
            event,
        })
    }

    /// Matching numbers: the batting side is out and the innings ends.
    fn dismissal(&mut self) -> DeliveryEvent {
        match self.innings {
            Innings::First => {
                let target = self.batting_score();
                debug!(target, "first innings closed");
                self.innings = Innings::Second { target };
                self.player_score = 0;
                self.computer_score = 0;
                self.batting = self.batting.opponent();
                DeliveryEvent::InningsEnd { target }
            }
            Innings::Second { target } => {
                let verdict = classify_chase_out(self.batting, self.batting_score(), target);
                self.end(verdict);
                DeliveryEvent::MatchEnd(verdict)
            }
        }
    }

    /// Credits runs to the batting side, then checks the chase.
    fn score(&mut self, runs: u32) -> DeliveryEvent {
        match self.batting {
            Side::Player => self.player_score += runs,
            Side::Computer => self.computer_score += runs,
        }
        if let Innings::Second { target } = self.innings {
            if self.batting_score() > target {
                let verdict = Verdict::Won(self.batting);
                self.end(verdict);
                return DeliveryEvent::MatchEnd(verdict);
            }
        }
        DeliveryEvent::Runs {
            side: self.batting,
            runs,
        }
    }

    fn end(&mut self, verdict: Verdict) {
        debug!(%verdict, "match over");
        self.phase = Phase::Ended(verdict);
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Current phase, including toss sub-stage or the verdict.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1 or 2.
    pub fn innings_number(&self) -> u8 {
        self.innings.number()
    }

    /// The chase target once the second innings starts.
    pub fn target(&self) -> Option<u32> {
        self.innings.target()
    }

    /// The side currently batting (meaningful once play starts).
    pub fn batting_side(&self) -> Side {
        self.batting
    }

    /// Runs the player has scored this innings.
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Runs the computer has scored this innings.
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// Runs of whichever side is batting.
    pub fn batting_score(&self) -> u32 {
        match self.batting {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    /// The verdict, once the match has ended.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Ended(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> MatchView {
        MatchView {
            phase: self.phase,
            innings: self.innings.number(),
            batting: self.batting,
            player_score: self.player_score,
            computer_score: self.computer_score,
            target: self.innings.target(),
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies a second-innings dismissal.
///
/// Total over the ordering of score against target, so there is no
/// fallback arm. Score above target cannot coincide with an out — the
/// chase check ends the match on the scoring ball — but the case still
/// classifies as a win for the batting side.
fn classify_chase_out(batting: Side, score: u32, target: u32) -> Verdict {
    match score.cmp(&target) {
        Ordering::Less => Verdict::Won(batting.opponent()),
        Ordering::Equal => Verdict::Draw,
        Ordering::Greater => Verdict::Won(batting),
    }
}
