//! Simplified blackjack against a dealer that draws to 17.
//!
//! Cards are drawn with replacement from an infinite deck. Aces count
//! 11 and drop to 1 while the hand is over 21.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;

/// Card values of one suit; face cards are 10, the ace 11.
pub const CARDS: [u8; 13] = [11, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

const ACE: u8 = 11;
const LIMIT: u32 = 21;
const DEALER_STANDS_AT: u32 = 17;

/// Anything that can hand out the next card.
pub trait CardSource {
    fn deal(&mut self) -> u8;
}

/// Uniform draws from [`CARDS`].
pub struct RandomCards<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomCards<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CardSource for RandomCards<R> {
    fn deal(&mut self) -> u8 {
        *CARDS.choose(&mut self.rng).unwrap_or(&ACE)
    }
}

/// Hand total with aces downgraded as needed.
pub fn score(hand: &[u8]) -> u32 {
    let mut total: u32 = hand.iter().map(|&c| u32::from(c)).sum();
    let mut aces = hand.iter().filter(|&&c| c == ACE).count();
    while total > LIMIT && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

/// Exactly two cards worth 21.
pub fn is_blackjack(hand: &[u8]) -> bool {
    hand.len() == 2 && score(hand) == LIMIT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DealerBlackjack,
    PlayerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Draw,
}

impl Outcome {
    pub fn player_won(self) -> bool {
        matches!(
            self,
            Outcome::PlayerBlackjack | Outcome::DealerBust | Outcome::PlayerWins
        )
    }

    pub fn is_draw(self) -> bool {
        self == Outcome::Draw
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::DealerBlackjack => "Computer has Blackjack! You lose!",
            Outcome::PlayerBlackjack => "You have Blackjack! You win!",
            Outcome::PlayerBust => "You went over 21! You lose!",
            Outcome::DealerBust => "Computer went over 21. You win!",
            Outcome::PlayerWins => "You win!",
            Outcome::DealerWins => "Computer wins!",
            Outcome::Draw => "It's a draw!",
        };
        f.write_str(text)
    }
}

/// One hand of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    player: Vec<u8>,
    dealer: Vec<u8>,
}

impl Round {
    /// Two cards each, player first.
    pub fn deal(cards: &mut impl CardSource) -> Self {
        let player = vec![cards.deal(), cards.deal()];
        let dealer = vec![cards.deal(), cards.deal()];
        Self { player, dealer }
    }

    pub fn player(&self) -> &[u8] {
        &self.player
    }

    pub fn dealer(&self) -> &[u8] {
        &self.dealer
    }

    /// The dealer's face-up card.
    pub fn dealer_up_card(&self) -> u8 {
        self.dealer[0]
    }

    pub fn player_score(&self) -> u32 {
        score(&self.player)
    }

    pub fn dealer_score(&self) -> u32 {
        score(&self.dealer)
    }

    /// A natural ends the round immediately. The dealer's is checked first.
    pub fn opening_outcome(&self) -> Option<Outcome> {
        if is_blackjack(&self.dealer) {
            Some(Outcome::DealerBlackjack)
        } else if is_blackjack(&self.player) {
            Some(Outcome::PlayerBlackjack)
        } else {
            None
        }
    }

    /// Give the player another card and return the new score.
    pub fn hit(&mut self, cards: &mut impl CardSource) -> u32 {
        self.player.push(cards.deal());
        self.player_score()
    }

    pub fn player_busted(&self) -> bool {
        self.player_score() > LIMIT
    }

    /// Dealer draws while at 16 or below.
    pub fn dealer_play(&mut self, cards: &mut impl CardSource) {
        while self.dealer_score() < DEALER_STANDS_AT {
            self.dealer.push(cards.deal());
        }
    }

    /// Compare the finished hands.
    pub fn settle(&self) -> Outcome {
        let player = self.player_score();
        let dealer = self.dealer_score();
        if player > LIMIT {
            Outcome::PlayerBust
        } else if dealer > LIMIT {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWins
        } else if dealer > player {
            Outcome::DealerWins
        } else {
            Outcome::Draw
        }
    }
}

/// Results across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        if outcome.is_draw() {
            self.draws += 1;
        } else if outcome.player_won() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
