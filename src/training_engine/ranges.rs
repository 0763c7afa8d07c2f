//! Range notation matcher.
//!
//! Supported shapes:
//! - `"QQ"`, `"AKs"`, `"AJo"`, `"AK"` - one hand class (`"AK"` covers suited and offsuit)
//! - `"QQ+"` - the pair and every higher pair
//! - `"AJo+"` - fixed high card, kicker climbing up to it (AJo, AQo, AKo)
//! - `"22-77"` - pairs between the two bounds
//! - `"A2s-A9s"` - fixed high card, kicker between the two bounds
//! - `"45s-78s"` - fixed gap, low card between the two bounds
//!
//! Terms may be written low card first (`"89s"`); they are normalised to the
//! high/low split before matching. Any other string matches nothing.

use crate::training_engine::models::{Hand, Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitedness {
    Suited,
    Offsuit,
    /// No suffix: pairs, or both suited and offsuit combos.
    Any,
}

impl Suitedness {
    fn admits(self, suited: bool) -> bool {
        match self {
            Suitedness::Suited  => suited,
            Suitedness::Offsuit => !suited,
            Suitedness::Any     => true,
        }
    }
}

/// A single term such as `"AKs"` or `"TT"`, split into high and low rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandClass {
    pub high: Rank,
    pub low: Rank,
    pub suitedness: Suitedness,
}

impl HandClass {
    pub fn parse(term: &str) -> Option<HandClass> {
        let chars: Vec<char> = term.chars().collect();
        if chars.len() != 2 && chars.len() != 3 {
            return None;
        }
        let a = Rank::from_char(chars[0]).ok()?;
        let b = Rank::from_char(chars[1]).ok()?;
        let suitedness = match chars.get(2).copied() {
            None => Suitedness::Any,
            Some('s') if a != b => Suitedness::Suited,
            Some('o') if a != b => Suitedness::Offsuit,
            Some(_) => return None,
        };
        Some(HandClass { high: a.max(b), low: a.min(b), suitedness })
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn gap(&self) -> u8 {
        self.high.0 - self.low.0
    }

    fn contains(&self, hand: &Hand) -> bool {
        if self.is_pair() {
            return hand.is_pair() && hand.high().rank == self.high;
        }
        !hand.is_pair()
            && hand.high().rank == self.high
            && hand.low().rank == self.low
            && self.suitedness.admits(hand.is_suited())
    }
}

/// A parsed range expression. Rebuilt per query by [`is_hand_in_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeExpr {
    Exact(HandClass),
    Plus(HandClass),
    PairSpan { from: Rank, to: Rank },
    KickerSpan { high: Rank, from: Rank, to: Rank, suitedness: Suitedness },
    /// The gap comes from the start term.
    ConnectorSpan { gap: u8, from: Rank, to: Rank, suitedness: Suitedness },
}

impl RangeExpr {
    pub fn parse(expr: &str) -> Option<RangeExpr> {
        if let Some(base) = expr.strip_suffix('+') {
            return HandClass::parse(base).map(RangeExpr::Plus);
        }

        let Some((start, end)) = expr.split_once('-') else {
            return HandClass::parse(expr).map(RangeExpr::Exact);
        };
        let start = HandClass::parse(start)?;
        let end = HandClass::parse(end)?;

        match (start.is_pair(), end.is_pair()) {
            (true, true) => Some(RangeExpr::PairSpan {
                from: start.high.min(end.high),
                to: start.high.max(end.high),
            }),
            (false, false) if start.suitedness == end.suitedness => {
                let (from, to) = (start.low.min(end.low), start.low.max(end.low));
                if start.high == end.high {
                    Some(RangeExpr::KickerSpan { high: start.high, from, to, suitedness: start.suitedness })
                } else {
                    Some(RangeExpr::ConnectorSpan { gap: start.gap(), from, to, suitedness: start.suitedness })
                }
            }
            _ => None,
        }
    }

    pub fn matches(&self, hand: &Hand) -> bool {
        let high = hand.high().rank;
        let low = hand.low().rank;
        match *self {
            RangeExpr::Exact(class) => class.contains(hand),
            RangeExpr::Plus(base) if base.is_pair() => hand.is_pair() && high >= base.high,
            RangeExpr::Plus(base) => {
                !hand.is_pair()
                    && high == base.high
                    && base.suitedness.admits(hand.is_suited())
                    && low >= base.low
            }
            RangeExpr::PairSpan { from, to } => hand.is_pair() && (from..=to).contains(&high),
            RangeExpr::KickerSpan { high: fixed, from, to, suitedness } => {
                !hand.is_pair()
                    && high == fixed
                    && suitedness.admits(hand.is_suited())
                    && (from..=to).contains(&low)
            }
            RangeExpr::ConnectorSpan { gap, from, to, suitedness } => {
                !hand.is_pair()
                    && hand.gap() == gap
                    && suitedness.admits(hand.is_suited())
                    && (from..=to).contains(&low)
            }
        }
    }
}

/// True if `hand` belongs to the range written as `expr`. Malformed
/// expressions match nothing.
pub fn is_hand_in_range(hand: &Hand, expr: &str) -> bool {
    RangeExpr::parse(expr).is_some_and(|range| range.matches(hand))
}
