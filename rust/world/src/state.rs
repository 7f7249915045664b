use std::collections::BTreeSet;

use gunslinger_engine::table::Table;

use crate::world::{initial_world, Location, LocationId, World};

/// What the input line is currently routed to.
///
/// Owning the table here means there is never more than one hand in play,
/// and that a table always means poker input.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Not started yet.
    Idle,
    Exploring,
    AtTable(Box<Table>),
    /// The loop is broken; the game is over.
    Won,
}

/// Everything that survives between commands.
#[derive(Debug, Clone)]
pub struct GameState {
    pub location: LocationId,
    pub world: World,
    pub inventory: Vec<String>,
    pub money: u32,
    pub loop_counter: u32,
    pub visited: BTreeSet<LocationId>,
    pub mode: Mode,
    /// Dealer button of the last hand played, carried across hands and loops.
    pub button: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            location: LocationId::SligoOutskirts,
            world: initial_world(),
            inventory: Vec::new(),
            money: 0,
            loop_counter: 0,
            visited: BTreeSet::new(),
            mode: Mode::Idle,
            button: 0,
        }
    }

    pub fn here(&self) -> Option<&Location> {
        self.world.get(&self.location)
    }

    pub fn here_mut(&mut self) -> Option<&mut Location> {
        self.world.get_mut(&self.location)
    }

    pub fn has(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    pub fn take_from_inventory(&mut self, item: &str) -> Option<String> {
        let idx = self.inventory.iter().position(|i| i == item)?;
        Some(self.inventory.remove(idx))
    }

    pub fn at_table(&self) -> bool {
        matches!(self.mode, Mode::AtTable(_))
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.mode {
            Mode::AtTable(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.mode, Mode::Idle | Mode::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Additive numerals for the loop title: 4 is `IIII`, 14 is `XIIII`.
pub fn loop_numeral(n: u32) -> String {
    let mut n = n;
    let mut out = String::new();
    for (value, glyph) in [(1000, "M"), (100, "C"), (10, "X"), (1, "I")] {
        out.push_str(&glyph.repeat((n / value) as usize));
        n %= value;
    }
    out
}
