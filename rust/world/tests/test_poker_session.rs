use gunslinger_world::{Game, GameOptions, LineKind, LocationId, OutputLine};

fn texts(lines: &[OutputLine]) -> Vec<String> {
    lines.iter().map(|l| l.text.clone()).collect()
}

fn with_money(seed: u64, money: u32) -> Game {
    let options = GameOptions {
        starting_money: money,
        ..GameOptions::default()
    };
    let mut game = Game::with_options(seed, options);
    game.start();
    game
}

fn seated(seed: u64) -> (Game, Vec<OutputLine>) {
    let mut game = with_money(seed, 100);
    game.process_command("e");
    game.process_command("n");
    let lines = game.process_command("play poker");
    (game, lines)
}

#[test]
fn the_dealer_wants_ten_dollars() {
    let mut game = with_money(5, 0);
    game.process_command("e");
    game.process_command("n");
    let lines = game.process_command("play poker");
    assert_eq!(lines[1].kind, LineKind::Error);
    assert!(lines[1].text.starts_with("You need at least $10 to join the game."));
    assert!(!game.state().at_table());

    game.process_command("s");
    let elsewhere = game.process_command("play poker");
    assert_eq!(elsewhere[1].text, "You can't play poker here.");
}

#[test]
fn sitting_down_posts_blinds_and_waits_for_you() {
    let (game, lines) = seated(9);
    let text = texts(&lines);
    assert!(text.contains(&"The game begins. Dealer is the dealer.".to_string()));
    assert!(text.contains(&"The Jackal posts the small blind of $5.".to_string()));
    assert!(text.contains(&"Vex posts the big blind of $10.".to_string()));
    assert!(text.iter().any(|t| t.starts_with("Your hand: ")));
    assert!(text.contains(&"Current bet to call: $10.".to_string()));

    assert!(game.state().at_table());
    assert_eq!(
        game.available_commands(),
        ["check", "bet [amount]", "call", "raise [amount]", "wager [item]", "fold"]
    );
    let table = game.state().table().unwrap();
    assert_eq!(table.current_player(), Some(0));
    assert_eq!(table.pot().chips, 15);
}

#[test]
fn illegal_actions_are_refused_without_moving_on() {
    let (mut game, _) = seated(9);
    let cases = [
        ("check", "You can't check, there is a bet to you. Try 'call' or 'raise'."),
        ("bet 20", "There is already a bet of $10. Try 'call' or 'raise'."),
        ("raise 15", "A raise must be at least double the current bet of $10."),
        ("bet", "You must bet a positive number."),
        ("raise 500", "You don't have enough money."),
        ("wager ornate gun", "You don't have a 'ornate gun' in your inventory."),
        (
            "go north",
            "Unknown poker command. Try 'check', 'bet', 'call', 'raise', 'wager', or 'fold'.",
        ),
    ];
    for (input, expected) in cases {
        let lines = game.process_command(input);
        assert_eq!(lines.len(), 2, "{input}");
        assert_eq!(lines[1].kind, LineKind::Error, "{input}");
        assert_eq!(lines[1].text, expected, "{input}");
    }
    let table = game.state().table().unwrap();
    assert_eq!(table.current_player(), Some(0));
    assert_eq!(table.pot().chips, 15);
}

#[test]
fn folding_plays_out_the_hand_and_returns_you_to_the_saloon() {
    let (mut game, _) = seated(21);
    let lines = game.process_command("fold");
    let text = texts(&lines);
    assert!(text.contains(&"You fold your hand.".to_string()));
    assert!(text.contains(&"--- Round Over ---".to_string()));
    assert!(text.contains(&"The game continues. Type 'play poker' to start the next hand.".to_string()));

    assert!(!game.state().at_table());
    assert_eq!(game.state().location, LocationId::SaloonMainRoom);
    assert_eq!(game.state().money, 100);

    let records = game.take_hand_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].players[0], "You");
    assert_eq!(records[0].button, 1);
    assert!(records[0].result.is_some());
    assert_eq!(records[0].meta, Some(serde_json::json!({ "loop": 1 })));
    assert!(game.take_hand_records().is_empty());

    let next = game.process_command("play poker");
    assert!(texts(&next).contains(&"The game begins. The Jackal is the dealer.".to_string()));
}

#[test]
fn wagered_items_leave_your_pockets() {
    let mut game = with_money(4, 100);
    for step in ["e", "n", "e", "get tarnished coin", "w", "play poker"] {
        game.process_command(step);
    }
    let lines = game.process_command("wager tarnished coin");
    assert_eq!(
        lines[1].text,
        "You toss your tarnished coin into the pot, raising the stakes."
    );
    let table = game.state().table().unwrap();
    assert_eq!(table.pot().items, ["tarnished coin"]);
    assert_eq!(table.current_player(), Some(0));

    game.process_command("fold");
    assert!(!game.state().inventory.contains(&"tarnished coin".to_string()));
    let records = game.take_hand_records();
    assert!(records[0]
        .wagers
        .iter()
        .any(|w| w.seat == 0 && w.item == "tarnished coin"));
}

#[test]
fn same_seed_same_story() {
    let script = ["e", "n", "play poker", "call", "check", "check", "check", "fold"];
    let run = |seed| {
        let mut game = with_money(seed, 100);
        script
            .iter()
            .flat_map(|line| game.process_command(line))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn going_broke_throws_you_back_to_the_outskirts() {
    let mut broke = None;
    for seed in 0..50 {
        let mut game = with_money(seed, 10);
        game.process_command("e");
        game.process_command("n");
        game.process_command("play poker");
        let mut lines = game.process_command("all-in");
        for _ in 0..10 {
            if !game.state().at_table() {
                break;
            }
            lines.extend(game.process_command("check"));
        }
        if game.state().loop_counter == 2 {
            broke = Some((game, lines));
            break;
        }
    }
    let (game, lines) = broke.expect("an all-in with $10 loses on some seed");

    assert!(lines.contains(&OutputLine::error(
        "You're out of money and have been kicked out of the game."
    )));
    assert!(lines.contains(&OutputLine::error(
        "You lost all your money at the poker table and were unceremoniously thrown out into the dust."
    )));
    assert!(texts(&lines).contains(&"Gunslinger Loop II".to_string()));
    assert_eq!(game.state().location, LocationId::SligoOutskirts);
    assert!(!game.state().at_table());
    assert_eq!(game.state().money, 10);
    assert!(game.state().inventory.is_empty());
}
