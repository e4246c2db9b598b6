//! Player identification for two-player games.
//!
//! Every state has exactly one acting player. The engine only needs to know
//! who moves and who the opponent is; names and turn order are the concrete
//! game's business.

use serde::{Deserialize, Serialize};

/// One of the two players of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// The first player.
    P1,
    /// The second player.
    P2,
}

impl PlayerId {
    /// Both players, first player first.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The other player.
    ///
    /// ```
    /// use zerosum::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::P1.opponent(), PlayerId::P2);
    /// assert_eq!(PlayerId::P2.opponent().opponent(), PlayerId::P2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Short name used by text front ends (`"p1"`, `"p2"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::P1 => "p1",
            PlayerId::P2 => "p2",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
