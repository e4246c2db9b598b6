//! Countdown: a tiny game used by unit tests.
//!
//! Players alternately take 1 or 2 counters from a pile. Whoever takes the
//! last counter wins. Positions with a multiple of 3 counters are lost for
//! the player to move.

use crate::core::{GameState, PlayerId, Result, SearchError};
use crate::rules::{Game, MoveOf};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Countdown {
    pub remaining: u32,
    pub player: PlayerId,
}

impl Countdown {
    pub fn new(remaining: u32, player: PlayerId) -> Self {
        Self { remaining, player }
    }
}

impl GameState for Countdown {
    type Move = u32;

    fn acting_player(&self) -> PlayerId {
        self.player
    }

    fn legal_moves(&self) -> Vec<u32> {
        (1..=self.remaining.min(2)).collect()
    }

    fn make_move(&self, mv: &u32) -> Self {
        if !self.is_valid_move(mv) {
            return self.clone();
        }
        Self::new(self.remaining - mv, self.player.opponent())
    }
}

#[derive(Clone, Debug)]
pub struct CountdownGame {
    current: Countdown,
}

impl CountdownGame {
    pub fn new(remaining: u32, first: PlayerId) -> Self {
        Self {
            current: Countdown::new(remaining, first),
        }
    }
}

impl Game for CountdownGame {
    type State = Countdown;

    fn current_state(&self) -> &Countdown {
        &self.current
    }

    fn set_current_state(&mut self, state: Countdown) {
        self.current = state;
    }

    fn is_over(&self, state: &Countdown) -> bool {
        state.remaining == 0
    }

    fn is_winner(&self, state: &Countdown, player: PlayerId) -> bool {
        self.is_over(state) && state.player != player
    }

    fn parse_move(&self, input: &str) -> Result<MoveOf<Self>> {
        input.trim().parse().map_err(|e: std::num::ParseIntError| SearchError::ParseMove {
            input: input.to_string(),
            reason: e.to_string(),
        })
    }

    fn instructions(&self) -> String {
        "Take 1 or 2 counters. Whoever takes the last counter wins.".to_string()
    }
}

/// A game that never ends but runs out of moves.
#[derive(Clone, Debug)]
pub struct Stalled {
    current: Countdown,
}

impl Stalled {
    pub fn new(remaining: u32) -> Self {
        Self {
            current: Countdown::new(remaining, PlayerId::P1),
        }
    }
}

impl Game for Stalled {
    type State = Countdown;

    fn current_state(&self) -> &Countdown {
        &self.current
    }

    fn set_current_state(&mut self, state: Countdown) {
        self.current = state;
    }

    fn is_over(&self, _state: &Countdown) -> bool {
        false
    }

    fn is_winner(&self, _state: &Countdown, _player: PlayerId) -> bool {
        false
    }

    fn parse_move(&self, input: &str) -> Result<u32> {
        CountdownGame::new(0, PlayerId::P1).parse_move(input)
    }

    fn instructions(&self) -> String {
        String::new()
    }
}
