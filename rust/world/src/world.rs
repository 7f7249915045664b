//! The town of Sligo: locations, exits and the things lying around in them.
//!
//! [`initial_world`] builds the pristine copy every loop starts from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Every place the gunslinger can stand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationId {
    SligoOutskirts,
    SligoMainRoad,
    SaloonMainRoom,
    Bar,
    BackAlley,
    CellarDoor,
    GeneralStore,
    Cellar,
}

impl LocationId {
    pub const ALL: [LocationId; 8] = [
        LocationId::SligoOutskirts,
        LocationId::SligoMainRoad,
        LocationId::SaloonMainRoom,
        LocationId::Bar,
        LocationId::BackAlley,
        LocationId::CellarDoor,
        LocationId::GeneralStore,
        LocationId::Cellar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationId::SligoOutskirts => "sligo_outskirts",
            LocationId::SligoMainRoad => "sligo_main_road",
            LocationId::SaloonMainRoom => "saloon_main_room",
            LocationId::Bar => "bar",
            LocationId::BackAlley => "back_alley",
            LocationId::CellarDoor => "cellar_door",
            LocationId::GeneralStore => "general_store",
            LocationId::Cellar => "cellar",
        }
    }

    /// Name used by `travel`.
    pub fn name(self) -> &'static str {
        match self {
            LocationId::SligoOutskirts => "Outskirts",
            LocationId::SligoMainRoad => "Main Road",
            LocationId::SaloonMainRoom => "Brimstone Bar",
            LocationId::Bar => "Bar",
            LocationId::BackAlley => "Back Alley",
            LocationId::CellarDoor => "Cellar Door",
            LocationId::GeneralStore => "General Store",
            LocationId::Cellar => "Cellar",
        }
    }

    pub fn from_name(name: &str) -> Option<LocationId> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name.trim()))
    }

    /// What happens when the gunslinger decides to end it here.
    pub fn death_message(self) -> &'static str {
        match self {
            LocationId::SligoOutskirts => {
                "You step off the cliff edge, plummeting into a comically named chasm."
            }
            LocationId::SligoMainRoad => {
                "A wild-eyed outlaw draws his pistol and fires. You feel an oozing red hole near your spleen before the world dissolves."
            }
            LocationId::SaloonMainRoom => "You challenge the entire room. They win.",
            LocationId::Bar => {
                "You sit at the obsidian bar for a drink...And forget how to stop.\nThe bartender seems to grow stronger each passing day as you drink yourself to death."
            }
            LocationId::BackAlley => {
                "You slip and fall head-first into the sizzling puddle. The last thing you see is the tarnished coin floating above you."
            }
            LocationId::CellarDoor => {
                "You try to pry the heavy iron door open with your bare hands, and it snaps shut on your fingers. The pain is too much. You fall into darkness."
            }
            LocationId::GeneralStore => {
                "You slap the gnome proprietor. He just blows a raspberry, and a strange wave of energy hits you. You turn to stone forever."
            }
            LocationId::Cellar => "The loop is broken. You are free.",
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Down,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Down => "down",
        }
    }
}

/// A place in the world. Exits keep the order they were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub description: String,
    pub exits: Vec<(Direction, LocationId)>,
    pub items: Vec<String>,
    /// Suggested commands, shown but never enforced.
    pub actions: Vec<String>,
}

impl Location {
    fn new(description: &str, exits: &[(Direction, LocationId)], items: &[&str], actions: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            exits: exits.to_vec(),
            items: items.iter().map(|s| s.to_string()).collect(),
            actions: actions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn exit(&self, dir: Direction) -> Option<LocationId> {
        self.exits.iter().find(|(d, _)| *d == dir).map(|&(_, id)| id)
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn take_item(&mut self, item: &str) -> Option<String> {
        let idx = self.items.iter().position(|i| i == item)?;
        Some(self.items.remove(idx))
    }
}

pub type World = BTreeMap<LocationId, Location>;

pub const POKER_TABLE: &str = "poker table";
pub const CELLAR_DOOR: &str = "cellar door";
pub const TARNISHED_COIN: &str = "tarnished coin";
pub const STRANGE_CONCOCTION: &str = "strange concoction";
pub const GLOWING_ROCK: &str = "glowing rock";

/// Scenery that shows up in item lists but can never be carried.
pub const FIXTURES: [&str; 4] = [POKER_TABLE, CELLAR_DOOR, "general store", "gnome"];

pub fn is_fixture(item: &str) -> bool {
    FIXTURES.contains(&item)
}

/// Flavour text for `examine`; `None` for things with nothing to say.
pub fn examine_text(item: &str) -> Option<&'static str> {
    let text = match item {
        POKER_TABLE => {
            "The poker table is surrounded by figures who look hauntingly familiar. The chips glow with a sickly green light."
        }
        STRANGE_CONCOCTION => "A bottle of dark, swirling liquid. It smells faintly of sulphur.",
        TARNISHED_COIN => {
            "A heavy, iron coin, encrusted with rust. It looks like it might fit a slot somewhere."
        }
        CELLAR_DOOR => "A heavy, iron door with a strange coin slot. It's too sturdy to break open.",
        "general store" => {
            "The general store is full of strange goods. The proprietor looks like he's seen a thing or two."
        }
        "gnome" => {
            "The gnome proprietor has a long, white beard and a surprisingly cheerful disposition."
        }
        "strange trinkets" => {
            "These trinkets look like they're from another dimension. They're not for sale... yet."
        }
        GLOWING_ROCK => {
            "A smooth, grey rock that pulses with a faint, internal light. It feels warm to the touch."
        }
        _ => return None,
    };
    Some(text)
}

pub const UNLOCKED_CELLAR_DOOR: &str =
    "The heavy iron door is now unlocked. A dark staircase leads down into the cellar.";

/// The world as it stands at the start of every loop.
pub fn initial_world() -> World {
    use Direction::*;
    use LocationId::*;

    let mut world = World::new();
    world.insert(
        SligoOutskirts,
        Location::new(
            "At the top of Gunslinger Loop.\nThis wicked geographical accident waves to the heavens like a muddy pitch lasso. \nEvery trail leads down east into Sligo.",
            &[(East, SligoMainRoad)],
            &[],
            &["go east", "die"],
        ),
    );
    world.insert(
        SligoMainRoad,
        Location::new(
            "Sligo ain´t much of a town really, just Brimstone to the north and a small store to the south. \nTo the west, you can see a fragment of sky through Gunslinger Loop. \nCan't keep going east without a horse and a gun.",
            &[(West, SligoOutskirts), (North, SaloonMainRoom), (South, GeneralStore)],
            &["general store"],
            &["go north (to Brimstone Bar)", "examine general store", "go south", "die"],
        ),
    );
    world.insert(
        SaloonMainRoom,
        Location::new(
            "The Brimstone Bar is a place drowning in smoke and music.\nThe whiskey soothes the patrons' violent temperament. \nA long, pitch-black bar runs along the north wall. \nAn open Alley facing east .The locked Cellar to the west.\nExit is south.",
            &[(East, BackAlley), (North, Bar), (West, CellarDoor), (South, SligoMainRoad)],
            &[POKER_TABLE],
            &["go east (into back alley)", "examine poker table", "look at patrons", "play poker", "die"],
        ),
    );
    world.insert(
        Bar,
        Location::new(
            "The bar is made of what looks like polished obsidian. \nBehind it, a bartender with glowing red eyes polishes a chalice. \nThe main room is back to the south.",
            &[(South, SaloonMainRoom)],
            &[STRANGE_CONCOCTION],
            &["die"],
        ),
    );
    world.insert(
        BackAlley,
        Location::new(
            "The alley is dark and grimy. \nA tarnished coin lies in a puddle of waste that sizzles when you get close. \nThe main room is back to the west.",
            &[(West, SaloonMainRoom)],
            &[TARNISHED_COIN],
            &["go west (back into Brimstone)", "get tarnished coin", "die"],
        ),
    );
    world.insert(
        CellarDoor,
        Location::new(
            "A heavy, iron door is set into the floor. It's locked. The main room is back to the east.",
            &[(East, SaloonMainRoom)],
            &[CELLAR_DOOR],
            &["unlock door", "die"],
        ),
    );
    world.insert(
        GeneralStore,
        Location::new(
            "The general store is a chaotic mess of goods. Shelves are lined with strange, otherworldly items. An old, gnomish-looking proprietor with a long beard and a friendly grin stands behind the counter. The main road is to the north.",
            &[(North, SligoMainRoad)],
            &["gnome", "strange trinkets"],
            &["talk to gnome", "examine strange trinkets", "die"],
        ),
    );
    world.insert(
        Cellar,
        Location::new(
            "You've entered the cellar.\nThrough the dim light, you see something you don´t want to see. \nThe two small bodies lie in embrace, disposed of and forgotten. \nYou were too late. \nOn the walls, written in grime:\n'You have found the truth. The loop is broken. Now you are free.'",
            &[],
            &[],
            &[],
        ),
    );
    world
}
