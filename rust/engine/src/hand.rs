use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// An evaluated five-card hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    // tie-break values, compared left to right
    pub values: Vec<u8>,
    pub cards: [Card; 5],
}

impl Hand {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

/// Classifies exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Hand {
    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight_high(&values);

    let hand = |category: Category, values: Vec<u8>| Hand {
        category,
        values,
        cards: *cards,
    };

    if let (Some(high), true) = (straight_high, is_flush) {
        let category = if high == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return hand(category, vec![high]);
    }

    let groups = group_by_count(&values);
    let primary: Vec<u8> = groups.iter().map(|&(_, v)| v).collect();
    let counts: Vec<u8> = groups.iter().map(|&(c, _)| c).collect();

    match counts.as_slice() {
        [4, ..] => hand(Category::FourOfAKind, primary),
        [3, 2] => hand(Category::FullHouse, primary),
        _ if is_flush => hand(Category::Flush, values),
        _ if straight_high.is_some() => {
            hand(Category::Straight, straight_high.into_iter().collect())
        }
        [3, ..] => hand(Category::ThreeOfAKind, primary),
        [2, 2, ..] => hand(Category::TwoPair, primary),
        [2, ..] => hand(Category::OnePair, primary),
        _ => hand(Category::HighCard, values),
    }
}

/// Best hand over every five-card combination of `cards`.
///
/// Returns `None` when fewer than five cards are known (pre-flop).
pub fn best_hand(cards: &[Card]) -> Option<Hand> {
    if cards.len() < 5 {
        return None;
    }
    Some(best_of(cards))
}

/// Best hand of a full seven-card holding (two hole cards plus the board).
pub fn evaluate_hand(cards: &[Card; 7]) -> Hand {
    best_of(cards)
}

pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.values.cmp(&b.values),
        ord => ord,
    }
}

/// Visits every five-card combination in lexicographic index order.
pub fn for_each_five<F: FnMut([Card; 5])>(cards: &[Card], mut f: F) {
    let n = cards.len();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        f([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
}

// callers guarantee at least five cards
fn best_of(cards: &[Card]) -> Hand {
    let mut best = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for_each_five(cards, |combo| {
        let candidate = evaluate_five(&combo);
        if compare_hands(&candidate, &best).is_gt() {
            best = candidate;
        }
    });
    best
}

fn detect_straight_high(desc_values: &[u8]) -> Option<u8> {
    if desc_values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    let consecutive = desc_values.windows(2).all(|w| w[0] == w[1] + 1);
    if consecutive {
        desc_values.first().copied()
    } else {
        None
    }
}

// (count, value) pairs ordered by count desc, then value desc
fn group_by_count(desc_values: &[u8]) -> Vec<(u8, u8)> {
    let mut rank_counts = [0u8; 15];
    for &v in desc_values {
        rank_counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1], v[2], v[3], v[4]]
    }

    #[test]
    fn groups_sort_by_count_then_value() {
        assert_eq!(
            group_by_count(&[13, 13, 9, 4, 4]),
            vec![(2, 13), (2, 4), (1, 9)]
        );
    }

    #[test]
    fn royal_flush_is_its_own_category() {
        let h = evaluate_five(&five("A♥ K♥ Q♥ J♥ 10♥"));
        assert_eq!(h.category, Category::RoyalFlush);
        assert_eq!(h.name(), "Royal Flush");
    }

    #[test]
    fn steel_wheel_is_a_five_high_straight_flush() {
        let h = evaluate_five(&five("A♣ 2♣ 3♣ 4♣ 5♣"));
        assert_eq!(h.category, Category::StraightFlush);
        assert_eq!(h.values, vec![5]);
    }

    #[test]
    fn best_hand_needs_five_cards() {
        let cards = parse_cards("A♠ A♥ K♦ K♣").unwrap();
        assert!(best_hand(&cards).is_none());
    }

    #[test]
    fn best_hand_of_six_picks_the_flush() {
        let cards = parse_cards("2♥ 7♥ 9♥ J♥ K♥ K♠").unwrap();
        let h = best_hand(&cards).unwrap();
        assert_eq!(h.category, Category::Flush);
        assert_eq!(h.values, vec![13, 11, 9, 7, 2]);
    }
}
