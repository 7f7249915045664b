//! The command dispatcher: one typed line in, a handful of output lines out.

use gunslinger_ai::house::HouseAI;
use gunslinger_ai::{NpcMove, NpcOpponent};
use gunslinger_engine::logger::HandRecord;
use gunslinger_engine::player::PlayerAction;
use gunslinger_engine::rules::Blinds;
use gunslinger_engine::table::{Table, TableEvent};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, error, info};

use crate::command::{parse_command, parse_poker_command, Command, PokerCommand};
use crate::output::{Out, OutputLine, Presenter, Transcript};
use crate::poker::{self, HUMAN_SEAT, POKER_COMMANDS, SEATS};
use crate::state::{loop_numeral, GameState, Mode};
use crate::world::{
    examine_text, initial_world, is_fixture, Direction, LocationId, CELLAR_DOOR, GLOWING_ROCK,
    POKER_TABLE, STRANGE_CONCOCTION, TARNISHED_COIN, UNLOCKED_CELLAR_DOOR,
};

const OPENING: &str =
    "You come awake atop your horse, at the edge of the chasm that is Gunslinger Loop.";
const BROKE: &str =
    "You lost all your money at the poker table and were unceremoniously thrown out into the dust.";
const NOT_RUNNING: &str = "Game is not running.";
const TABLE_TROUBLE: &str = "The dealer sweeps the cards away. Something went wrong at the table.";

/// Knobs the embedding application may turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Money needed to sit down at the poker table.
    pub buy_in: u32,
    /// Money in the gunslinger's pockets at the start of every loop.
    pub starting_money: u32,
    pub blinds: Blinds,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            buy_in: 10,
            starting_money: 0,
            blinds: Blinds::default(),
        }
    }
}

/// A running Gunslinger Loop session.
///
/// All randomness (shuffles, NPC rolls, the concoction) is drawn from `R`, so
/// a seeded `Game` replays identically for the same input lines.
pub struct Game<R: RngCore = ChaCha20Rng> {
    state: GameState,
    rng: R,
    options: GameOptions,
    ai: Box<dyn NpcOpponent>,
    finished_hands: Vec<HandRecord>,
}

impl Game<ChaCha20Rng> {
    pub fn new(seed: u64) -> Self {
        Self::with_options(seed, GameOptions::default())
    }

    pub fn with_options(seed: u64, options: GameOptions) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed), options)
    }
}

impl<R: RngCore> Game<R> {
    pub fn with_rng(rng: R, options: GameOptions) -> Self {
        Self {
            state: GameState::new(),
            rng,
            options,
            ai: Box::new(HouseAI::new()),
            finished_hands: Vec::new(),
        }
    }

    /// Replaces the policy driving the non-player seats.
    pub fn with_ai(mut self, ai: Box<dyn NpcOpponent>) -> Self {
        self.ai = ai;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Hands played since the last call, oldest first.
    pub fn take_hand_records(&mut self) -> Vec<HandRecord> {
        std::mem::take(&mut self.finished_hands)
    }

    /// Begins the first loop. Does nothing once the game is already under way.
    pub fn start(&mut self) -> Vec<OutputLine> {
        let mut transcript = Transcript::default();
        self.start_into(&mut transcript);
        transcript.lines
    }

    pub fn start_into(&mut self, presenter: &mut dyn Presenter) {
        if matches!(self.state.mode, Mode::Idle) {
            let mut out = Out::new(presenter);
            self.reset_loop(OPENING, &mut out);
        }
    }

    /// Runs one line of input to completion, NPC turns included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gunslinger_world::{Game, LineKind};
    ///
    /// let mut game = Game::new(7);
    /// game.start();
    /// let lines = game.process_command("go west");
    /// assert_eq!(lines[0].text, "> go west");
    /// assert_eq!(lines[1].kind, LineKind::Error);
    /// ```
    pub fn process_command(&mut self, raw: &str) -> Vec<OutputLine> {
        let mut transcript = Transcript::default();
        self.process_command_into(raw, &mut transcript);
        transcript.lines
    }

    pub fn process_command_into(&mut self, raw: &str, presenter: &mut dyn Presenter) {
        let mut out = Out::new(presenter);
        if !self.state.is_running() {
            out.error(NOT_RUNNING);
            return;
        }
        out.line(OutputLine::echo(format!("> {raw}")));

        if self.state.at_table() {
            self.poker_command(raw, &mut out);
            return;
        }

        match parse_command(raw) {
            Command::Go(dir) => self.go(&dir, &mut out),
            Command::Travel(name) => self.travel(&name, &mut out),
            Command::Look => self.look(&mut out),
            Command::Examine(item) => self.examine(&item, &mut out),
            Command::Get(item) => self.get(&item, &mut out),
            Command::Inventory => self.inventory(&mut out),
            Command::Help => self.help(&mut out),
            Command::Play(what) => self.play(&what, &mut out),
            Command::Trade(item) => self.trade(&item, &mut out),
            Command::Ask(topic) => self.ask(&topic, &mut out),
            Command::Quit => self.reset_loop(
                "You feel a cold jolt... and then, you're back on your horse, the town of Sligo before you once more.",
                &mut out,
            ),
            Command::Drink(item) => self.drink(&item, &mut out),
            Command::Unlock(what) => self.unlock(&what, &mut out),
            Command::Die => {
                let message = self.state.location.death_message();
                self.reset_loop(message, &mut out);
            }
            Command::Unknown => {
                out.error(format!("I don't understand that command: '{}'.", raw.trim()));
            }
        }
    }

    /// Commands worth suggesting right now.
    pub fn available_commands(&self) -> Vec<String> {
        if self.state.at_table() {
            return POKER_COMMANDS.iter().map(|c| c.to_string()).collect();
        }
        let mut commands: Vec<String> = Vec::new();
        let mut add = |c: String| {
            if !commands.contains(&c) {
                commands.push(c);
            }
        };
        let Some(here) = self.state.here() else {
            return Vec::new();
        };
        let location = self.state.location;

        if self.state.visited.len() > 1 {
            add("travel [location]".to_string());
        }
        for item in &here.items {
            if !is_fixture(item) {
                add(format!("get {item}"));
            }
            add(format!("examine {item}"));
        }
        if location == LocationId::SaloonMainRoom {
            add(format!("examine {CELLAR_DOOR}"));
            if here.has_item(POKER_TABLE) {
                add("play poker".to_string());
            }
        }
        for action in &here.actions {
            add(action.clone());
        }
        if location == LocationId::Bar && self.state.has(TARNISHED_COIN) {
            add(format!("trade {TARNISHED_COIN}"));
        }
        if here.has_item(STRANGE_CONCOCTION) || self.state.has(STRANGE_CONCOCTION) {
            add(format!("drink {STRANGE_CONCOCTION}"));
        }
        if location == LocationId::Bar && self.state.loop_counter >= 2 {
            add("ask about the loop".to_string());
        }
        add("die".to_string());
        commands
    }

    fn describe(&self, out: &mut Out<'_>) {
        if let Some(here) = self.state.here() {
            out.say(here.description.clone());
        }
        self.list_commands(out);
    }

    fn list_commands(&self, out: &mut Out<'_>) {
        out.help(format!(
            "Available commands: {}",
            self.available_commands().join(", ")
        ));
    }

    fn enter(&mut self, to: LocationId, out: &mut Out<'_>) {
        self.state.location = to;
        self.state.visited.insert(to);
        out.moved(to);
        self.describe(out);
    }

    fn reset_loop(&mut self, message: &str, out: &mut Out<'_>) {
        self.state.mode = Mode::Exploring;
        self.state.loop_counter += 1;
        let counter = self.state.loop_counter;

        out.say(format!("Gunslinger Loop {}", loop_numeral(counter)));
        out.say("-------------------------");
        out.error(message);

        self.state.world = initial_world();
        if counter >= 2 {
            if let Some(bar) = self.state.world.get_mut(&LocationId::Bar) {
                bar.actions.push("ask about the loop".to_string());
            }
            if counter == 2 {
                out.say("A strange sense of deja vu washes over you. You feel like you've learned something.");
            }
        }
        if counter >= 3 {
            if let Some(store) = self.state.world.get_mut(&LocationId::GeneralStore) {
                store.items.push(GLOWING_ROCK.to_string());
            }
            if counter == 3 {
                out.say("The world feels slightly different this time. A new energy emanates from the General Store.");
            }
        }

        self.state.inventory.clear();
        self.state.money = self.options.starting_money;
        info!(loop_counter = counter, "loop reset");

        self.state.location = LocationId::SligoOutskirts;
        self.state.visited.insert(LocationId::SligoOutskirts);
        out.moved(LocationId::SligoOutskirts);
        if let Some(here) = self.state.here() {
            out.say(here.description.clone());
        }
        out.say("Your pockets are empty, the frontier lies unbothered before you.");
        self.list_commands(out);
    }

    fn go(&mut self, dir: &str, out: &mut Out<'_>) {
        let target = Direction::parse(dir)
            .and_then(|d| self.state.here().and_then(|here| here.exit(d)));
        let Some(target) = target else {
            out.error("You can't go that way.");
            return;
        };
        if target == LocationId::Cellar {
            self.state.location = target;
            self.state.visited.insert(target);
            out.moved(target);
            if let Some(cellar) = self.state.here() {
                out.say(cellar.description.clone());
            }
            out.say("--- YOU HAVE BROKEN THE LOOP ---");
            out.say("Thank you for playing!");
            self.state.mode = Mode::Won;
            info!(loop_counter = self.state.loop_counter, "loop broken");
            return;
        }
        self.enter(target, out);
    }

    fn travel(&mut self, name: &str, out: &mut Out<'_>) {
        match LocationId::from_name(name) {
            Some(to) if self.state.visited.contains(&to) => {
                out.say(format!("You travel to the {}.", to.name()));
                self.enter(to, out);
            }
            _ => out.error(
                "You can't travel there. You either haven't discovered it or it doesn't exist.",
            ),
        }
    }

    fn look(&self, out: &mut Out<'_>) {
        let Some(here) = self.state.here() else {
            return;
        };
        out.say(here.description.clone());
        if !here.items.is_empty() {
            out.help(format!("You also see: {}.", here.items.join(", ")));
        }
        self.list_commands(out);
    }

    fn examine(&self, item: &str, out: &mut Out<'_>) {
        let present = self.state.here().is_some_and(|here| here.has_item(item))
            || (item == CELLAR_DOOR && self.state.location == LocationId::SaloonMainRoom);
        if present {
            match examine_text(item) {
                Some(text) => out.say(text),
                None => out.say(format!("You see nothing special about the {item}.")),
            }
        } else if self.state.has(item) {
            out.say(format!("You already have the {item} in your inventory."));
        } else {
            out.error(format!("There is no '{item}' here to examine."));
        }
    }

    fn get(&mut self, item: &str, out: &mut Out<'_>) {
        let Some(here) = self.state.here_mut() else {
            return;
        };
        if !here.has_item(item) {
            out.error(format!("There is no '{item}' here to take."));
            return;
        }
        if is_fixture(item) {
            out.error(format!("You can't take the {item}."));
            return;
        }
        let taken = here.take_item(item);
        if let Some(taken) = taken {
            self.state.inventory.push(taken);
            out.say(format!("You take the {item}."));
        }
    }

    fn inventory(&self, out: &mut Out<'_>) {
        if self.state.inventory.is_empty() {
            out.say("Your inventory is empty.");
        } else {
            out.say(format!(
                "Your inventory contains: {}",
                self.state.inventory.join(", ")
            ));
        }
        if self.state.money > 0 {
            out.say(format!("You have ${}.", self.state.money));
        }
    }

    fn help(&self, out: &mut Out<'_>) {
        out.help("Available commands:");
        for line in [
            "go [direction] - Move in a direction (north, south, east, west, down).",
            "travel [location] - Return to a place you have already visited.",
            "look - Look around your current location.",
            "examine [item] - Examine an item more closely.",
            "get [item] - Pick up an item.",
            "inventory - Check your inventory.",
            "play poker - Sit down at the poker table.",
            "trade [item] - Trade an item at the bar.",
            "drink [item] - Drink something.",
            "unlock door - Try to open a locked door.",
            "die - End it all and start over.",
            "quit - Start the loop over.",
        ] {
            out.help(line);
        }
    }

    fn trade(&mut self, item: &str, out: &mut Out<'_>) {
        if self.state.location != LocationId::Bar {
            out.error("This isn't the place for trading. Try the bar.");
            return;
        }
        if item == TARNISHED_COIN && self.state.take_from_inventory(item).is_some() {
            self.state.money += 1000;
            out.say("You slide the tarnished coin to the bartender. He grunts and pushes a stack of $1000 your way.");
        } else {
            out.error("You can't trade that here, or you don't have it.");
        }
    }

    fn ask(&self, topic: &str, out: &mut Out<'_>) {
        if topic == "about the loop"
            && self.state.location == LocationId::Bar
            && self.state.loop_counter >= 2
        {
            out.say("You ask the bartender about the repeating day. He stops polishing the chalice and his glowing eyes fix on you. 'Some souls are too stubborn to pass on,' he rasps. 'They get stuck. Like a record skipping.' He gestures to the poker table. 'Some try to win their way out. Others just... fade.'");
        } else {
            out.error("You can't ask about that here.");
        }
    }

    fn drink(&mut self, item: &str, out: &mut Out<'_>) {
        let in_room = self.state.here().is_some_and(|here| here.has_item(item));
        if item != STRANGE_CONCOCTION || !(in_room || self.state.has(item)) {
            out.error(format!("You can't drink the {item}."));
            return;
        }
        let roll: f64 = self.rng.random();
        debug!(roll, "strange concoction");
        if roll < 0.5 {
            if in_room {
                if let Some(here) = self.state.here_mut() {
                    here.take_item(item);
                }
            } else {
                self.state.take_from_inventory(item);
            }
            out.say("The concoction tastes of rust and copper. A strange vision flashes before your eyes: a hidden symbol on the cellar floor.");
        } else {
            self.reset_loop(
                "You drink the strange concoction. Your head spins, your vision blurs, and the world shatters.",
                out,
            );
        }
    }

    fn unlock(&mut self, what: &str, out: &mut Out<'_>) {
        if what != "door" {
            out.error("Unlock what? It's best to be specific.");
            return;
        }
        if self.state.location != LocationId::CellarDoor {
            out.error("You don't see a door to unlock here.");
            return;
        }
        if self.state.take_from_inventory(TARNISHED_COIN).is_none() {
            out.error("You examine the lock, but you don't have anything that fits the strange, coin-shaped slot.");
            return;
        }
        out.say("You kneel and insert the tarnished coin into the strange slot on the iron door. It fits perfectly. With a heavy *CLUNK*, the lock disengages.");
        if let Some(door) = self.state.here_mut() {
            door.description = UNLOCKED_CELLAR_DOOR.to_string();
            door.exits.push((Direction::Down, LocationId::Cellar));
            door.actions.retain(|a| a != "unlock door");
            door.actions.push("go down".to_string());
        }
        out.say("The way down is now open.");
    }

    fn play(&mut self, what: &str, out: &mut Out<'_>) {
        let at_table = self.state.here().is_some_and(|here| here.has_item(POKER_TABLE));
        if what != "poker" || !at_table {
            out.error("You can't play poker here.");
            return;
        }
        if self.state.money < self.options.buy_in {
            out.error(format!(
                "You need at least ${} to join the game. The dealer won't let you sit. Maybe you can trade something of value at the bar.",
                self.options.buy_in
            ));
            return;
        }
        out.say("You sit down at the glowing poker table, facing a grim-faced dealer and two other players.");

        let button = (self.state.button + 1) % SEATS;
        let seats = poker::seat_players(self.state.money, self.state.inventory.clone());
        match Table::start(seats, button, self.options.blinds, &mut self.rng) {
            Ok((table, events)) => {
                self.state.button = button;
                self.state.inventory.clear();
                poker::announce_start(&table, out);
                poker::narrate(&table, &events, out);
                self.state.mode = Mode::AtTable(Box::new(table));
                self.run_table(out);
            }
            Err(e) => {
                error!(error = %e, "could not open a table");
                out.error(TABLE_TROUBLE);
            }
        }
    }

    fn poker_command(&mut self, raw: &str, out: &mut Out<'_>) {
        let Mode::AtTable(table) = &mut self.state.mode else {
            return;
        };
        let action = match parse_poker_command(raw) {
            PokerCommand::Check => PlayerAction::Check,
            PokerCommand::Call => PlayerAction::Call,
            PokerCommand::Fold => PlayerAction::Fold,
            PokerCommand::AllIn => PlayerAction::AllIn,
            PokerCommand::Bet(Some(amount)) => PlayerAction::Bet(amount),
            PokerCommand::Raise(Some(amount)) => PlayerAction::Raise(amount),
            PokerCommand::Bet(None) | PokerCommand::Raise(None) => {
                out.error("You must bet a positive number.");
                return;
            }
            PokerCommand::Wager(item) => {
                match table.wager(HUMAN_SEAT, &item) {
                    Ok(event) => poker::narrate(table, &[event], out),
                    Err(e) => out.error(poker::refusal(&e)),
                }
                return;
            }
            PokerCommand::Unknown => {
                out.error("Unknown poker command. Try 'check', 'bet', 'call', 'raise', 'wager', or 'fold'.");
                return;
            }
        };
        if table.player(HUMAN_SEAT).is_some_and(|p| p.folded) {
            out.error("You have already folded this round.");
            return;
        }
        match table.apply_action(HUMAN_SEAT, action) {
            Ok(events) => {
                poker::narrate(table, &events, out);
                self.run_table(out);
            }
            Err(e) => out.error(poker::refusal(&e)),
        }
    }

    /// Plays NPC seats until the human owes a decision or the hand closes.
    fn run_table(&mut self, out: &mut Out<'_>) {
        loop {
            let Mode::AtTable(table) = &mut self.state.mode else {
                return;
            };
            let seat = match table.current_player() {
                None => break,
                Some(HUMAN_SEAT) => {
                    poker::prompt(table, out);
                    return;
                }
                Some(seat) => seat,
            };

            let result = match self.ai.get_action(table, seat, &mut self.rng) {
                NpcMove::Wager(item) => table.wager(seat, &item).and_then(|event| {
                    let mut events = vec![event];
                    events.extend(table.pass_turn(seat)?);
                    Ok(events)
                }),
                NpcMove::Act(action) => table.apply_action(seat, action),
            };
            let events = match result {
                Ok(events) => events,
                Err(e) => {
                    error!(error = %e, seat, "npc move rejected, folding the seat");
                    match table.apply_action(seat, PlayerAction::Fold) {
                        Ok(events) => events,
                        Err(e) => {
                            error!(error = %e, seat, "table is stuck, abandoning the hand");
                            out.error(TABLE_TROUBLE);
                            break;
                        }
                    }
                }
            };
            for event in &events {
                if let TableEvent::StreetDealt { phase, .. } = event {
                    debug!(phase = phase.name(), "street dealt");
                }
            }
            poker::narrate(table, &events, out);
        }
        self.leave_table(out);
    }

    fn leave_table(&mut self, out: &mut Out<'_>) {
        let Mode::AtTable(table) = std::mem::replace(&mut self.state.mode, Mode::Exploring) else {
            return;
        };
        let mut record = table.record().clone();
        record.meta = Some(serde_json::json!({ "loop": self.state.loop_counter }));
        if let Some(result) = &record.result {
            info!(result = %result, "hand finished");
        }
        self.finished_hands.push(record);

        let mut players = (*table).into_players();
        if players.is_empty() {
            return;
        }
        let you = players.swap_remove(HUMAN_SEAT);
        self.state.money = you.chips;
        self.state.inventory.extend(you.items);

        if self.state.money == 0 {
            out.error("You're out of money and have been kicked out of the game.");
            self.reset_loop(BROKE, out);
        } else {
            out.say("The game continues. Type 'play poker' to start the next hand.");
            self.describe(out);
        }
    }
}
