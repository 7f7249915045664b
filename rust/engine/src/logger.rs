use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// Records a single betting action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0 is the human)
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action taken by the player
    pub action: PlayerAction,
}

/// An item thrown into the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WagerRecord {
    pub seat: usize,
    pub street: Street,
    pub item: String,
}

/// A hand shown down, with the category of its best five cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub seat: usize,
    pub hole: Vec<Card>,
    pub category: String,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won the hand
    pub winners: Vec<usize>,
    /// Every hand that reached the showdown
    pub hands: Vec<RevealedHand>,
    /// Optional notes about the showdown (e.g. "split pot")
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of a saloon hand including all actions, board cards, and outcome.
/// Serialized one per line (JSONL) by [`HandLogger`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier of the form `YYYYMMDD-NNNNNN`; assigned when the record is written
    #[serde(default)]
    pub hand_id: String,
    /// Seat names in seat order
    pub players: Vec<String>,
    /// Dealer button seat
    pub button: usize,
    /// Chronological list of betting actions
    pub actions: Vec<ActionRecord>,
    #[serde(default)]
    pub wagers: Vec<WagerRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Hand result summary (winner, pot size)
    pub result: Option<String>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (seed, loop number)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn new(players: Vec<String>, button: usize) -> Self {
        Self {
            hand_id: String::new(),
            players,
            button,
            actions: Vec::new(),
            wagers: Vec::new(),
            board: Vec::new(),
            result: None,
            ts: None,
            meta: None,
            showdown: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends hand records to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that assigns ids but writes nowhere.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Writes one record, filling in the id and timestamp when missing.
    /// Returns the id the record was written under.
    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<String> {
        let mut rec = record.clone();
        if rec.hand_id.is_empty() {
            rec.hand_id = self.next_id();
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(rec.hand_id)
    }
}
