use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{best_hand, compare_hands, Hand};
use crate::logger::{ActionRecord, HandRecord, RevealedHand, ShowdownInfo, Street, WagerRecord};
use crate::player::{Player, PlayerAction};
use crate::pot::Pot;
use crate::rules::{min_raise_to, validate_action, Blinds, ValidatedAction};

pub const MAX_SEATS: usize = 10;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Closed,
}

impl Phase {
    fn street(self) -> Street {
        match self {
            Phase::PreFlop => Street::Preflop,
            Phase::Flop => Street::Flop,
            Phase::Turn => Street::Turn,
            Phase::River | Phase::Showdown | Phase::Closed => Street::River,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::PreFlop => "Pre-flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
            Phase::Closed => "Closed",
        }
    }
}

/// A hand revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub seat: usize,
    pub hand: Hand,
}

/// Outcome of a closed hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Winning seats, in seat order.
    pub winners: Vec<usize>,
    /// Pot size before it was paid out.
    pub pot: u32,
    pub share: u32,
    /// Chips lost to the even split.
    pub remainder: u32,
    pub item_recipient: Option<usize>,
    pub items: Vec<String>,
    /// Empty when everyone else folded.
    pub revealed: Vec<Revealed>,
}

impl Settlement {
    pub fn uncontested(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Things that happened while applying a command, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    BlindPosted { seat: usize, amount: u32 },
    HoleCardsDealt,
    Acted { seat: usize, action: ValidatedAction },
    ItemWagered { seat: usize, item: String },
    StreetDealt { phase: Phase, board: Vec<Card> },
    HandOver(Settlement),
}

/// One hand of saloon hold'em, from the blinds to the payout.
///
/// Every mutation goes through [`Table::apply_action`] or [`Table::wager`];
/// a rejected action leaves the table exactly as it was.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    players: Vec<Player>,
    community: Vec<Card>,
    pot: Pot,
    current_bet: u32,
    phase: Phase,
    current: usize,
    button: usize,
    blinds: Blinds,
    item_wagered: bool,
    settlement: Option<Settlement>,
    record: HandRecord,
}

impl Table {
    /// Shuffles a fresh deck, posts the blinds and deals two cards to every seat.
    ///
    /// The small and big blind come from the two seats after `button` and are
    /// capped at the poster's stack. Action starts with the seat after the big
    /// blind.
    pub fn start<R: Rng + ?Sized>(
        players: Vec<Player>,
        button: usize,
        blinds: Blinds,
        rng: &mut R,
    ) -> Result<(Self, Vec<TableEvent>), GameError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(players, button, blinds, deck)
    }

    /// Like [`Table::start`] but deals from `deck` as given.
    ///
    /// Hole cards go out two at a time in seat order, then the flop, turn
    /// and river come off the top.
    pub fn with_deck(
        mut players: Vec<Player>,
        button: usize,
        blinds: Blinds,
        deck: Deck,
    ) -> Result<(Self, Vec<TableEvent>), GameError> {
        let n = players.len();
        if !(2..=MAX_SEATS).contains(&n) {
            return Err(GameError::InvalidSeatCount {
                seats: n,
                max: MAX_SEATS,
            });
        }
        if button >= n {
            return Err(GameError::InvalidSeat(button));
        }

        for p in players.iter_mut() {
            p.hole.clear();
            p.folded = false;
            p.reset_street();
        }

        let record = HandRecord::new(players.iter().map(|p| p.name.clone()).collect(), button);
        let mut table = Table {
            deck,
            players,
            community: Vec::with_capacity(5),
            pot: Pot::new(),
            current_bet: blinds.big,
            phase: Phase::PreFlop,
            current: 0,
            button,
            blinds,
            item_wagered: false,
            settlement: None,
            record,
        };

        let mut events = Vec::new();
        let sb = (button + 1) % n;
        let bb = (button + 2) % n;
        for (seat, amount) in [(sb, blinds.small), (bb, blinds.big)] {
            let paid = table.players[seat].pay(amount);
            table.pot.add_chips(paid);
            events.push(TableEvent::BlindPosted { seat, amount: paid });
        }

        for seat in 0..n {
            let hole = table.deck.deal(2)?;
            table.players[seat].hole = hole;
        }
        events.push(TableEvent::HoleCardsDealt);

        table.current = bb;
        table.progress((bb + 1) % n, &mut events)?;
        Ok((table, events))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Smallest legal "raise to" total right now.
    pub fn min_raise(&self) -> u32 {
        min_raise_to(self.current_bet)
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map(|p| self.current_bet.saturating_sub(p.committed))
            .unwrap_or(0)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn button(&self) -> usize {
        self.button
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    /// Whether an NPC has already put an item in the pot this hand.
    pub fn item_wagered(&self) -> bool {
        self.item_wagered
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Seat whose decision the table is waiting for; `None` once closed.
    pub fn current_player(&self) -> Option<usize> {
        if self.is_closed() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    pub fn record(&self) -> &HandRecord {
        &self.record
    }

    /// Consumes the table, handing the seats back to their owner.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// Applies a betting action for `seat` and runs the table forward until
    /// another decision is needed or the hand closes.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<Vec<TableEvent>, GameError> {
        self.check_turn(seat)?;
        let p = &self.players[seat];
        if p.folded {
            return Err(GameError::PlayerAlreadyFolded);
        }
        let validated = validate_action(p.chips, p.committed, self.current_bet, action.clone())?;

        let p = &mut self.players[seat];
        let paid = match validated {
            ValidatedAction::Fold => {
                p.folded = true;
                0
            }
            ValidatedAction::Check => 0,
            ValidatedAction::Call(amount) => p.pay(amount),
            ValidatedAction::Bet(total)
            | ValidatedAction::Raise(total)
            | ValidatedAction::AllIn(total) => {
                let cost = total.saturating_sub(p.committed);
                p.pay(cost)
            }
        };
        p.acted = true;
        p.last_action = Some(action.clone());
        let committed = p.committed;
        self.pot.add_chips(paid);

        if committed > self.current_bet {
            self.current_bet = committed;
            for (i, other) in self.players.iter_mut().enumerate() {
                if i != seat {
                    other.acted = false;
                }
            }
        }

        self.record.actions.push(ActionRecord {
            seat,
            street: self.phase.street(),
            action,
        });

        let mut events = vec![TableEvent::Acted {
            seat,
            action: validated,
        }];
        self.progress((seat + 1) % self.players.len(), &mut events)?;
        Ok(events)
    }

    /// Moves one of the acting player's items into the pot.
    ///
    /// Wagering is a side action: the same seat still has to act. Only NPC
    /// wagers count towards [`Table::item_wagered`].
    pub fn wager(&mut self, seat: usize, item: &str) -> Result<TableEvent, GameError> {
        self.check_turn(seat)?;
        let taken = self.players[seat]
            .take_item(item)
            .ok_or_else(|| GameError::UnknownItem(item.to_string()))?;
        self.pot.add_item(taken.clone());
        if !self.players[seat].is_human {
            self.item_wagered = true;
        }
        self.record.wagers.push(WagerRecord {
            seat,
            street: self.phase.street(),
            item: taken.clone(),
        });
        Ok(TableEvent::ItemWagered { seat, item: taken })
    }

    /// Hands the decision to the next seat without betting.
    ///
    /// Used when a wager takes the place of a seat's decision. The seat is
    /// asked again later in the street if it still owes an action.
    pub fn pass_turn(&mut self, seat: usize) -> Result<Vec<TableEvent>, GameError> {
        self.check_turn(seat)?;
        let mut events = Vec::new();
        self.progress((seat + 1) % self.players.len(), &mut events)?;
        Ok(events)
    }

    fn check_turn(&self, seat: usize) -> Result<(), GameError> {
        if matches!(self.phase, Phase::Showdown | Phase::Closed) {
            return Err(GameError::HandAlreadyComplete);
        }
        if seat >= self.players.len() {
            return Err(GameError::InvalidSeat(seat));
        }
        if seat != self.current {
            return Err(GameError::NotPlayersTurn {
                expected: self.current,
                actual: seat,
            });
        }
        Ok(())
    }

    fn live_seats(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&i| self.players[i].in_hand())
            .collect()
    }

    fn needs_action(&self, p: &Player) -> bool {
        p.can_act() && (!p.acted || p.committed < self.current_bet)
    }

    // first seat at or after `from` that still owes a decision this street
    fn next_to_act(&self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|k| (from + k) % n)
            .find(|&i| self.needs_action(&self.players[i]))
    }

    fn street_complete(&self) -> bool {
        let actors: Vec<&Player> = self.players.iter().filter(|p| p.can_act()).collect();
        if actors.len() <= 1 {
            return actors.iter().all(|p| p.committed >= self.current_bet);
        }
        actors.iter().all(|p| !self.needs_action(p))
    }

    fn progress(&mut self, from: usize, events: &mut Vec<TableEvent>) -> Result<(), GameError> {
        let mut from = from;
        loop {
            let live = self.live_seats();
            if live.len() <= 1 {
                self.award_uncontested(live.first().copied(), events);
                return Ok(());
            }
            if !self.street_complete() {
                if let Some(seat) = self.next_to_act(from) {
                    self.current = seat;
                    return Ok(());
                }
            }
            if self.phase == Phase::River {
                self.showdown(events);
                return Ok(());
            }
            self.advance_street(events)?;
            from = (self.button + 1) % self.players.len();
        }
    }

    fn advance_street(&mut self, events: &mut Vec<TableEvent>) -> Result<(), GameError> {
        let (next, count) = match self.phase {
            Phase::PreFlop => (Phase::Flop, 3),
            Phase::Flop => (Phase::Turn, 1),
            Phase::Turn => (Phase::River, 1),
            _ => return Ok(()),
        };
        let cards = self.deck.deal(count)?;
        self.community.extend(cards);
        self.phase = next;
        self.current_bet = 0;
        for p in self.players.iter_mut() {
            p.reset_street();
        }
        events.push(TableEvent::StreetDealt {
            phase: next,
            board: self.community.clone(),
        });
        Ok(())
    }

    fn award_uncontested(&mut self, winner: Option<usize>, events: &mut Vec<TableEvent>) {
        let pot = self.pot.take();
        let settlement = match winner {
            Some(seat) => {
                self.players[seat].add_chips(pot.chips);
                let item_recipient = if pot.items.is_empty() { None } else { Some(seat) };
                self.players[seat].items.extend(pot.items.iter().cloned());
                Settlement {
                    winners: vec![seat],
                    pot: pot.chips,
                    share: pot.chips,
                    remainder: 0,
                    item_recipient,
                    items: pot.items,
                    revealed: Vec::new(),
                }
            }
            None => Settlement {
                winners: Vec::new(),
                pot: pot.chips,
                share: 0,
                remainder: pot.chips,
                item_recipient: None,
                items: pot.items,
                revealed: Vec::new(),
            },
        };
        self.close(settlement, None, events);
    }

    fn showdown(&mut self, events: &mut Vec<TableEvent>) {
        self.phase = Phase::Showdown;
        let mut revealed: Vec<Revealed> = Vec::new();
        for seat in self.live_seats() {
            let mut cards = self.players[seat].hole.clone();
            cards.extend_from_slice(&self.community);
            if let Some(hand) = best_hand(&cards) {
                revealed.push(Revealed { seat, hand });
            }
        }

        let mut winners: Vec<usize> = Vec::new();
        let mut best: Option<&Hand> = None;
        for r in &revealed {
            match best.map(|b| compare_hands(&r.hand, b)) {
                None | Some(std::cmp::Ordering::Greater) => {
                    best = Some(&r.hand);
                    winners = vec![r.seat];
                }
                Some(std::cmp::Ordering::Equal) => winners.push(r.seat),
                Some(std::cmp::Ordering::Less) => {}
            }
        }

        let pot = self.pot.take();
        let split = pot.split(winners.len());
        let (share, remainder, item_recipient) = match split {
            Some(s) => (s.share, s.remainder, s.item_recipient.map(|i| winners[i])),
            None => (0, pot.chips, None),
        };
        for &seat in &winners {
            self.players[seat].add_chips(share);
        }
        if let Some(seat) = item_recipient {
            self.players[seat].items.extend(pot.items.iter().cloned());
        }

        let info = ShowdownInfo {
            winners: winners.clone(),
            hands: revealed
                .iter()
                .map(|r| RevealedHand {
                    seat: r.seat,
                    hole: self.players[r.seat].hole.clone(),
                    category: r.hand.name().to_string(),
                })
                .collect(),
            notes: if winners.len() > 1 {
                Some("split pot".to_string())
            } else {
                None
            },
        };
        let settlement = Settlement {
            winners,
            pot: pot.chips,
            share,
            remainder,
            item_recipient,
            items: pot.items,
            revealed,
        };
        self.close(settlement, Some(info), events);
    }

    fn close(
        &mut self,
        settlement: Settlement,
        showdown: Option<ShowdownInfo>,
        events: &mut Vec<TableEvent>,
    ) {
        let names: Vec<&str> = settlement
            .winners
            .iter()
            .map(|&s| self.players[s].name.as_str())
            .collect();
        self.record.board = self.community.clone();
        self.record.result = Some(format!("{} won {}", names.join(" and "), settlement.pot));
        self.record.showdown = showdown;
        self.phase = Phase::Closed;
        self.settlement = Some(settlement.clone());
        events.push(TableEvent::HandOver(settlement));
    }
}
