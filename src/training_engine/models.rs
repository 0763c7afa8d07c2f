use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::training_engine::error::ParseError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn from_char(c: char) -> Result<Suit, ParseError> {
        match c {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            other => Err(ParseError::InvalidSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(pub u8);

impl Rank {
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// All thirteen ranks, deuce first.
    pub fn all() -> impl DoubleEndedIterator<Item = Rank> {
        (2u8..=14).map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    pub fn from_char(c: char) -> Result<Rank, ParseError> {
        let value = match c {
            '2'..='9' => c as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            other => return Err(ParseError::InvalidRank(other)),
        };
        Ok(Rank(value))
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (2..=14).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(ParseError::InvalidRankValue(value))
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses "Ah", "Td", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(ParseError::InvalidLength { what: "card", input: s.to_string(), expected: 2 });
        }
        Ok(Card {
            rank: Rank::from_char(chars[0])?,
            suit: Suit::from_char(chars[1])?,
        })
    }
}

// ---------------------------------------------------------------------------
// Hand
// ---------------------------------------------------------------------------

/// Two distinct hole cards. Order of construction is irrelevant: every
/// accessor works on the high/low split, and equality ignores deal order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "[Card; 2]", into = "[Card; 2]")]
pub struct Hand([Card; 2]);

impl Hand {
    pub fn new(a: Card, b: Card) -> Result<Hand, ParseError> {
        if a == b {
            return Err(ParseError::DuplicateCard(a.to_string()));
        }
        Ok(Hand([a, b]))
    }

    /// The cards in the order they were dealt.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    pub fn high(&self) -> Card {
        if self.0[0].rank >= self.0[1].rank { self.0[0] } else { self.0[1] }
    }

    pub fn low(&self) -> Card {
        if self.0[0].rank >= self.0[1].rank { self.0[1] } else { self.0[0] }
    }

    pub fn is_pair(&self) -> bool {
        self.0[0].rank == self.0[1].rank
    }

    pub fn is_suited(&self) -> bool {
        self.0[0].suit == self.0[1].suit
    }

    /// Rank distance between the high and low card (0 for pairs, 1 for connectors).
    pub fn gap(&self) -> u8 {
        self.high().rank.0 - self.low().rank.0
    }

    /// Canonical notation: "QQ", "AKs", "T9o".
    pub fn notation(&self) -> String {
        let (high, low) = (self.high().rank, self.low().rank);
        if self.is_pair() {
            format!("{high}{low}")
        } else {
            let suffix = if self.is_suited() { 's' } else { 'o' };
            format!("{high}{low}{suffix}")
        }
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        let [a, b] = self.0;
        other.0 == [a, b] || other.0 == [b, a]
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Parses "AhKs". Anything but four characters is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(ParseError::InvalidLength { what: "hand", input: s.to_string(), expected: 4 });
        }
        let card = |i: usize| -> Result<Card, ParseError> {
            Ok(Card { rank: Rank::from_char(chars[i])?, suit: Suit::from_char(chars[i + 1])? })
        };
        Hand::new(card(0)?, card(2)?)
    }
}

impl TryFrom<[Card; 2]> for Hand {
    type Error = ParseError;

    fn try_from(cards: [Card; 2]) -> Result<Self, Self::Error> {
        Hand::new(cards[0], cards[1])
    }
}

impl From<Hand> for [Card; 2] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

// ---------------------------------------------------------------------------
// Table metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    UTG,
    UTG1,
    UTG2,
    MP,
    MP1,
    CO,   // Cutoff
    BTN,  // Button
    SB,   // Small Blind
    BB,   // Big Blind
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::UTG  => "UTG",
            Position::UTG1 => "UTG+1",
            Position::UTG2 => "UTG+2",
            Position::MP   => "MP",
            Position::MP1  => "MP+1",
            Position::CO   => "CO",
            Position::BTN  => "BTN",
            Position::SB   => "SB",
            Position::BB   => "BB",
        };
        write!(f, "{}", s)
    }
}

impl Position {
    pub fn name(self) -> &'static str {
        match self {
            Position::UTG  => "Under the Gun",
            Position::UTG1 => "Under the Gun +1",
            Position::UTG2 => "Under the Gun +2",
            Position::MP   => "Middle Position",
            Position::MP1  => "Middle Position +1",
            Position::CO   => "Cutoff",
            Position::BTN  => "Button",
            Position::SB   => "Small Blind",
            Position::BB   => "Big Blind",
        }
    }

    /// Cutoff and Button: the seats where speculative hands may isolate.
    pub fn is_late(self) -> bool {
        matches!(self, Position::CO | Position::BTN)
    }

    /// The blinds play every postflop street out of position.
    pub fn is_out_of_position(self) -> bool {
        matches!(self, Position::SB | Position::BB)
    }
}

/// Supported table sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    HeadsUp,
    SixMax,
    NineMax,
}

const POSITIONS_HU: &[Position] = &[Position::SB, Position::BB];

const POSITIONS_6MAX: &[Position] = &[
    Position::UTG, Position::MP, Position::CO,
    Position::BTN, Position::SB, Position::BB,
];

const POSITIONS_9MAX: &[Position] = &[
    Position::UTG, Position::UTG1, Position::UTG2,
    Position::MP, Position::MP1, Position::CO,
    Position::BTN, Position::SB, Position::BB,
];

impl PlayerCount {
    pub fn seats(self) -> u8 {
        match self {
            PlayerCount::HeadsUp => 2,
            PlayerCount::SixMax  => 6,
            PlayerCount::NineMax => 9,
        }
    }

    /// Seats in preflop action order.
    pub fn positions(self) -> &'static [Position] {
        match self {
            PlayerCount::HeadsUp => POSITIONS_HU,
            PlayerCount::SixMax  => POSITIONS_6MAX,
            PlayerCount::NineMax => POSITIONS_9MAX,
        }
    }

    pub fn max_limpers(self) -> u8 {
        match self {
            PlayerCount::HeadsUp => 1,
            PlayerCount::SixMax  => 3,
            PlayerCount::NineMax => 5,
        }
    }

    pub fn first_to_act(self) -> Position {
        self.positions()[0]
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = ParseError;

    fn try_from(seats: u8) -> Result<Self, Self::Error> {
        match seats {
            2 => Ok(PlayerCount::HeadsUp),
            6 => Ok(PlayerCount::SixMax),
            9 => Ok(PlayerCount::NineMax),
            other => Err(ParseError::InvalidPlayerCount(other)),
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.seats()
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCount::HeadsUp => write!(f, "Heads-Up"),
            PlayerCount::SixMax  => write!(f, "6-Max"),
            PlayerCount::NineMax => write!(f, "9-Max"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Preflop,
    Flop,
}

// ---------------------------------------------------------------------------
// Post-flop vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VillainType {
    /// Loose-passive calling station.
    PassiveStation,
    Maniac,
    Nit,
}

impl fmt::Display for VillainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VillainType::PassiveStation => write!(f, "Passive Station"),
            VillainType::Maniac         => write!(f, "Maniac"),
            VillainType::Nit            => write!(f, "Nit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardTexture {
    Dry,
    Wet,
    Paired,
    Monotone,
}

impl BoardTexture {
    pub const ALL: [BoardTexture; 4] =
        [BoardTexture::Dry, BoardTexture::Wet, BoardTexture::Paired, BoardTexture::Monotone];
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardTexture::Dry      => write!(f, "dry"),
            BoardTexture::Wet      => write!(f, "wet"),
            BoardTexture::Paired   => write!(f, "paired"),
            BoardTexture::Monotone => write!(f, "monotone"),
        }
    }
}

/// What the hero holds on the flop, attached by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlopHolding {
    Overpair,
    TopPairTopKicker,
    Set,
    ComboDraw,
    WeakDraw,
}

impl fmt::Display for FlopHolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlopHolding::Overpair         => write!(f, "an overpair"),
            FlopHolding::TopPairTopKicker => write!(f, "top pair top kicker"),
            FlopHolding::Set              => write!(f, "a set"),
            FlopHolding::ComboDraw        => write!(f, "a combo draw"),
            FlopHolding::WeakDraw         => write!(f, "a weak draw"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// One training instance. Built once by the generator, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub hero_position: Position,
    pub hero_hand: Hand,
    pub limpers: u8,
    pub is_straddled: bool,
    /// In big blinds.
    pub pot_size: f64,
    /// Effective stack in big blinds.
    pub stack_size: f64,
    pub player_count: PlayerCount,
    pub description: String,
    pub stage: Stage,
    /// Empty preflop, exactly three cards on the flop.
    pub board: Vec<Card>,
    pub texture: Option<BoardTexture>,
    pub villain_type: Option<VillainType>,
    pub villain_action: Option<String>,
    pub holding: Option<FlopHolding>,
}

impl Scenario {
    /// Assemble a preflop scenario, deriving pot, stack and description.
    ///
    /// `limpers` is capped at the table's maximum.
    pub fn preflop(
        player_count: PlayerCount,
        hero_position: Position,
        hero_hand: Hand,
        limpers: u8,
        is_straddled: bool,
    ) -> Scenario {
        let limpers = limpers.min(player_count.max_limpers());
        let pot_size = 1.5 + f64::from(limpers) + if is_straddled { 2.0 } else { 0.0 };
        let stack_size = if is_straddled { 50.0 } else { 100.0 };

        let limper_text = match limpers {
            1 => "There is 1 limper before you.".to_string(),
            n => format!("There are {n} limpers before you."),
        };
        let straddle_text = if is_straddled { " UTG has straddled." } else { "" };

        Scenario {
            hero_position,
            hero_hand,
            limpers,
            is_straddled,
            pot_size,
            stack_size,
            player_count,
            description: format!("You are {hero_position}. {limper_text}{straddle_text}"),
            stage: Stage::Preflop,
            board: Vec::new(),
            texture: None,
            villain_type: None,
            villain_action: None,
            holding: None,
        }
    }
}

// ---------------------------------------------------------------------------
// User input / verdict
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    /// Accepted as input but never a judged answer.
    Check,
    /// Also covers limping preflop.
    Call,
    Raise,
}

impl FromStr for ActionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionKind::Fold),
            "check" => Ok(ActionKind::Check),
            "call" | "limp" => Ok(ActionKind::Call),
            "raise" => Ok(ActionKind::Raise),
            _ => Err(ParseError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Fold  => write!(f, "fold"),
            ActionKind::Check => write!(f, "check"),
            ActionKind::Call  => write!(f, "call"),
            ActionKind::Raise => write!(f, "raise"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Raise size in big blinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl GameAction {
    pub fn fold() -> Self {
        GameAction { kind: ActionKind::Fold, amount: None }
    }

    pub fn check() -> Self {
        GameAction { kind: ActionKind::Check, amount: None }
    }

    pub fn call() -> Self {
        GameAction { kind: ActionKind::Call, amount: None }
    }

    pub fn raise(amount_bb: f64) -> Self {
        GameAction { kind: ActionKind::Raise, amount: Some(amount_bb) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub is_correct: bool,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// Which street the seeded entry point should generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StageSelector {
    #[default]
    Preflop,
    Flop,
    /// Coin flip between the two.
    Any,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub player_count: PlayerCount,
    #[serde(default)]
    pub stage: StageSelector,
    /// `Some(seed)` reproduces the exact same scenario; `None` draws from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl ScenarioRequest {
    /// Preflop, entropy-seeded.
    pub fn new(player_count: PlayerCount) -> Self {
        ScenarioRequest { player_count, stage: StageSelector::Preflop, rng_seed: None }
    }

    pub fn with_stage(mut self, stage: StageSelector) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for ScenarioRequest {
    fn default() -> Self {
        ScenarioRequest::new(PlayerCount::SixMax)
    }
}
