//! The authored strategy table: named categories of range expressions.
//!
//! Changing strategy means editing the lists below, never the matcher.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::training_engine::{models::Hand, ranges::is_hand_in_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeCategory {
    IsolationValue,
    IsolationMedium,
    IsolationSuitedBroadway,
    /// Raises only from the Cutoff or Button.
    IsolationSpeculative,
    OverlimpSmallPair,
    OverlimpSuitedConnector,
    OverlimpNutFlush,
}

impl RangeCategory {
    pub const ALL: [RangeCategory; 7] = [
        RangeCategory::IsolationValue,
        RangeCategory::IsolationMedium,
        RangeCategory::IsolationSuitedBroadway,
        RangeCategory::IsolationSpeculative,
        RangeCategory::OverlimpSmallPair,
        RangeCategory::OverlimpSuitedConnector,
        RangeCategory::OverlimpNutFlush,
    ];

    /// Raise-worthy categories in judging priority order.
    pub const RAISE: [RangeCategory; 4] = [
        RangeCategory::IsolationValue,
        RangeCategory::IsolationMedium,
        RangeCategory::IsolationSuitedBroadway,
        RangeCategory::IsolationSpeculative,
    ];

    pub const LIMP: [RangeCategory; 3] = [
        RangeCategory::OverlimpSmallPair,
        RangeCategory::OverlimpSuitedConnector,
        RangeCategory::OverlimpNutFlush,
    ];

    pub fn ranges(self) -> &'static [&'static str] {
        match self {
            RangeCategory::IsolationValue          => &["QQ+", "JJ", "TT", "AK", "AQ", "AJ", "KQ"],
            RangeCategory::IsolationMedium         => &["88", "99"],
            RangeCategory::IsolationSuitedBroadway => &["KQs", "QJs", "JTs"],
            RangeCategory::IsolationSpeculative    => &["A5s", "89s"],
            RangeCategory::OverlimpSmallPair       => &["22-77"],
            RangeCategory::OverlimpSuitedConnector => &["45s-78s"],
            RangeCategory::OverlimpNutFlush        => &["A2s-A9s"],
        }
    }

    pub fn is_raise_worthy(self) -> bool {
        Self::RAISE.contains(&self)
    }

    /// Membership in any expression of the category qualifies the hand.
    pub fn contains(self, hand: &Hand) -> bool {
        self.ranges().iter().any(|expr| is_hand_in_range(hand, expr))
    }

    /// Identifier used in logs and client payloads, e.g. `ISOLATION_VALUE`.
    pub fn key(self) -> &'static str {
        match self {
            RangeCategory::IsolationValue          => "ISOLATION_VALUE",
            RangeCategory::IsolationMedium         => "ISOLATION_MEDIUM",
            RangeCategory::IsolationSuitedBroadway => "ISOLATION_SUITED_BROADWAY",
            RangeCategory::IsolationSpeculative    => "ISOLATION_SPECULATIVE",
            RangeCategory::OverlimpSmallPair       => "OVERLIMP_SMALL_PAIR",
            RangeCategory::OverlimpSuitedConnector => "OVERLIMP_SUITED_CONNECTOR",
            RangeCategory::OverlimpNutFlush        => "OVERLIMP_NUT_FLUSH",
        }
    }
}

impl fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RangeCategory::IsolationValue          => "isolation value",
            RangeCategory::IsolationMedium         => "medium pair isolation",
            RangeCategory::IsolationSuitedBroadway => "suited broadway isolation",
            RangeCategory::IsolationSpeculative    => "speculative isolation",
            RangeCategory::OverlimpSmallPair       => "small pair over-limp",
            RangeCategory::OverlimpSuitedConnector => "suited connector over-limp",
            RangeCategory::OverlimpNutFlush        => "weak suited ace over-limp",
        };
        write!(f, "{}", s)
    }
}
