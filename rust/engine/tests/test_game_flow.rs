use gunslinger_engine::cards::{parse_cards, Card};
use gunslinger_engine::deck::Deck;
use gunslinger_engine::errors::GameError;
use gunslinger_engine::hand::Category;
use gunslinger_engine::player::{Player, PlayerAction as A};
use gunslinger_engine::rules::Blinds;
use gunslinger_engine::table::{Phase, Table, TableEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn saloon() -> Vec<Player> {
    vec![
        Player::human("You", 100, vec![]),
        Player::new("Dealer", 1000),
        Player::new("The Jackal", 1500).with_items(vec!["ornate gun".into()]),
        Player::new("Vex", 800).with_items(vec!["silver locket".into()]),
    ]
}

// hole cards for seat 0 then seat 1, then the five board cards
fn stacked(cards: &str) -> Deck {
    let mut v: Vec<Card> = parse_cards(cards).unwrap();
    for c in Deck::new().cards() {
        if !v.contains(c) {
            v.push(*c);
        }
    }
    Deck::from_cards(v)
}

fn heads_up(chips: u32, cards: &str) -> Table {
    let seats = vec![
        Player::human("You", chips, vec!["tarnished coin".into()]),
        Player::new("Dealer", chips),
    ];
    // button 0: seat 1 posts the small blind and acts first
    Table::with_deck(seats, 0, Blinds::default(), stacked(cards))
        .unwrap()
        .0
}

fn check_down(t: &mut Table) {
    while let Some(seat) = t.current_player() {
        t.apply_action(seat, A::Check).unwrap();
    }
}

#[test]
fn seeded_tables_deal_identically() {
    let a = Table::start(saloon(), 0, Blinds::default(), &mut ChaCha20Rng::seed_from_u64(1)).unwrap().0;
    let b = Table::start(saloon(), 0, Blinds::default(), &mut ChaCha20Rng::seed_from_u64(1)).unwrap().0;
    let holes = |t: &Table| t.players().iter().map(|p| p.hole.clone()).collect::<Vec<_>>();
    assert_eq!(holes(&a), holes(&b));
}

#[test]
fn start_rejects_bad_seating() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let err = Table::start(vec![Player::new("Solo", 10)], 0, Blinds::default(), &mut rng).unwrap_err();
    assert!(matches!(err, GameError::InvalidSeatCount { seats: 1, .. }));
    let err = Table::start(saloon(), 4, Blinds::default(), &mut rng).unwrap_err();
    assert_eq!(err, GameError::InvalidSeat(4));
}

#[test]
fn raise_below_double_leaves_table_untouched() {
    let mut t = Table::start(saloon(), 0, Blinds::default(), &mut ChaCha20Rng::seed_from_u64(8)).unwrap().0;
    let seat = t.current_player().unwrap();
    let chips_before: Vec<u32> = t.players().iter().map(|p| p.chips).collect();

    let err = t.apply_action(seat, A::Raise(15)).unwrap_err();
    assert!(matches!(err, GameError::RaiseTooSmall { .. }));
    assert_eq!(t.current_player(), Some(seat));
    assert_eq!(t.pot().chips, 15);
    assert_eq!(t.current_bet(), 10);
    assert_eq!(t.players().iter().map(|p| p.chips).collect::<Vec<_>>(), chips_before);
    assert!(t.record().actions.is_empty());
}

#[test]
fn folding_round_to_big_blind_awards_whole_pot() {
    let mut t = Table::start(saloon(), 0, Blinds::default(), &mut ChaCha20Rng::seed_from_u64(3)).unwrap().0;
    // button 0: Dealer small blind, Jackal big blind, Vex first
    t.apply_action(3, A::Fold).unwrap();
    t.apply_action(0, A::Fold).unwrap();
    let events = t.apply_action(1, A::Fold).unwrap();

    assert!(t.is_closed());
    assert_eq!(t.current_player(), None);
    let s = t.settlement().unwrap();
    assert!(s.uncontested());
    assert_eq!(s.winners, vec![2]);
    assert_eq!(s.pot, 15);
    assert_eq!(t.players()[2].chips, 1505);
    assert_eq!(t.players()[1].chips, 995);
    assert!(matches!(events.last(), Some(TableEvent::HandOver(_))));
    assert_eq!(t.apply_action(2, A::Check), Err(GameError::HandAlreadyComplete));
}

#[test]
fn raise_reopens_the_action() {
    let mut t = Table::start(saloon(), 0, Blinds::default(), &mut ChaCha20Rng::seed_from_u64(4)).unwrap().0;
    t.apply_action(3, A::Call).unwrap();
    t.apply_action(0, A::Raise(40)).unwrap();
    assert_eq!(t.current_bet(), 40);
    assert_eq!(t.players()[0].chips, 60);
    t.apply_action(1, A::Call).unwrap();
    t.apply_action(2, A::Call).unwrap();
    // Vex called 10 before the raise and owes 30 more
    assert_eq!(t.current_player(), Some(3));
    assert_eq!(t.to_call(3), 30);
    t.apply_action(3, A::Call).unwrap();
    assert_eq!(t.phase(), Phase::Flop);
    assert_eq!(t.community().len(), 3);
    assert_eq!(t.pot().chips, 160);
    // first live seat after the button opens the flop
    assert_eq!(t.current_player(), Some(1));
}

#[test]
fn checked_down_hand_goes_to_the_better_hand() {
    let mut t = heads_up(100, "A♠ A♥ 2♥ 7♦ K♣ 9♦ 5♠ 4♣ J♥");
    assert_eq!(t.current_player(), Some(1));
    t.apply_action(1, A::Call).unwrap();
    t.apply_action(0, A::Check).unwrap();
    assert_eq!(t.phase(), Phase::Flop);
    check_down(&mut t);

    let s = t.settlement().unwrap();
    assert_eq!(s.winners, vec![0]);
    assert_eq!(s.revealed.len(), 2);
    assert_eq!(s.revealed[0].hand.category, Category::OnePair);
    assert_eq!(t.players()[0].chips, 110);
    assert_eq!(t.players()[1].chips, 90);
    assert_eq!(t.community().len(), 5);
    let showdown = t.record().showdown.as_ref().unwrap();
    assert_eq!(showdown.winners, vec![0]);
}

#[test]
fn tied_hands_split_and_first_seat_takes_items() {
    let mut t = heads_up(100, "2♥ 3♦ 2♣ 3♠ A♠ K♠ Q♦ J♣ 9♥");
    t.apply_action(1, A::Call).unwrap();
    t.wager(0, "tarnished coin").unwrap();
    assert_eq!(t.current_player(), Some(0));
    t.apply_action(0, A::Check).unwrap();
    check_down(&mut t);

    let s = t.settlement().unwrap();
    assert_eq!(s.winners, vec![0, 1]);
    assert_eq!(s.share, 10);
    assert_eq!(s.remainder, 0);
    assert_eq!(s.item_recipient, Some(0));
    assert_eq!(t.players()[0].items, vec!["tarnished coin".to_string()]);
    assert_eq!(t.players()[0].chips, 100);
    assert_eq!(t.players()[1].chips, 100);
    assert_eq!(
        t.record().showdown.as_ref().unwrap().notes.as_deref(),
        Some("split pot")
    );
}

#[test]
fn all_in_and_call_runs_out_the_board() {
    let mut t = heads_up(100, "A♠ A♥ 2♥ 7♦ K♣ 9♦ 5♠ 4♣ J♥");
    t.apply_action(1, A::AllIn).unwrap();
    let events = t.apply_action(0, A::Call).unwrap();

    let streets = events
        .iter()
        .filter(|e| matches!(e, TableEvent::StreetDealt { .. }))
        .count();
    assert_eq!(streets, 3);
    assert!(t.is_closed());
    assert_eq!(t.players()[0].chips, 200);
    assert_eq!(t.players()[1].chips, 0);
}

#[test]
fn hand_record_tracks_actions_and_board() {
    let mut t = heads_up(100, "A♠ A♥ 2♥ 7♦ K♣ 9♦ 5♠ 4♣ J♥");
    t.apply_action(1, A::Call).unwrap();
    t.apply_action(0, A::Bet(20)).unwrap_err();
    t.apply_action(0, A::Raise(20)).unwrap();
    t.apply_action(1, A::Fold).unwrap();

    let rec = t.record();
    assert_eq!(rec.players, vec!["You".to_string(), "Dealer".to_string()]);
    assert_eq!(rec.actions.len(), 3);
    assert_eq!(rec.actions[1].action, A::Raise(20));
    assert!(rec.board.is_empty());
    assert_eq!(rec.result.as_deref(), Some("You won 30"));
}
