//! 13x13 starting-hand chart coloured by the baseline preflop action.
//!
//! Rows and columns run Ace down to deuce. The diagonal holds pairs, the
//! upper triangle suited hands and the lower triangle offsuit hands. Position
//! and straddle are ignored, so speculative hands show as raises.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    models::{Card, Hand, Rank, Suit},
    range_table::RangeCategory,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartAction {
    Raise,
    Limp,
    Fold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCell {
    /// Canonical notation, e.g. "AKs".
    pub label: String,
    pub action: ChartAction,
}

impl fmt::Display for ChartCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.action {
            ChartAction::Raise => 'R',
            ChartAction::Limp  => 'L',
            ChartAction::Fold  => '.',
        };
        write!(f, "{:<3}{}", self.label, mark)
    }
}

/// Baseline action for one hand.
pub fn chart_action(hand: &Hand) -> ChartAction {
    if RangeCategory::RAISE.iter().any(|c| c.contains(hand)) {
        ChartAction::Raise
    } else if RangeCategory::LIMP.iter().any(|c| c.contains(hand)) {
        ChartAction::Limp
    } else {
        ChartAction::Fold
    }
}

/// A representative hand for the cell at (`row`, `col`) of the grid.
fn cell_hand(row: Rank, col: Rank) -> Hand {
    let (high, low) = (row.max(col), row.min(col));
    // Above the diagonal the row rank is the higher one: suited.
    let second_suit = if row > col { Suit::Spades } else { Suit::Hearts };
    Hand::new(Card::new(high, Suit::Spades), Card::new(low, second_suit))
        .unwrap_or_else(|_| unreachable!("cell cards always differ in rank or suit"))
}

pub fn range_chart() -> Vec<Vec<ChartCell>> {
    Rank::all()
        .rev()
        .map(|row| {
            Rank::all()
                .rev()
                .map(|col| {
                    let hand = cell_hand(row, col);
                    ChartCell { label: hand.notation(), action: chart_action(&hand) }
                })
                .collect()
        })
        .collect()
}

/// The chart as fixed-width text, one row per line.
pub fn render_chart() -> String {
    range_chart()
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
