use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Record of one finished round, one JSON object per line in the round log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Game type name ("poker" or "blackjack")
    pub game: String,
    /// Deck seed for the session (enables deterministic replay)
    pub seed: u64,
    /// Player's final hand
    pub player: Vec<Card>,
    /// Dealer's final hand, empty for poker
    #[serde(default)]
    pub dealer: Vec<Card>,
    /// End-of-round message
    pub result: String,
    /// Amount actually credited to the bank, if any
    #[serde(default)]
    pub payout: Option<u32>,
    /// Timestamp when the round ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSONL file, numbering rounds per session.
pub struct RoundLogger {
    out: Option<BufWriter<File>>,
    day: String,
    rounds: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating it and its parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
            _ => {}
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            day: Utc::now().format("%Y%m%d").to_string(),
            rounds: 0,
        })
    }

    /// Logger that numbers rounds but writes nothing.
    pub fn in_memory(day: &str) -> Self {
        Self {
            out: None,
            day: day.to_owned(),
            rounds: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.rounds += 1;
        format_round_id(&self.day, self.rounds)
    }

    /// Writes one line, stamping `ts` with the current UTC time when unset.
    pub fn write(&mut self, record: &RoundRecord) -> io::Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        let line = match record.ts {
            Some(_) => serde_json::to_string(record),
            None => serde_json::to_string(&RoundRecord {
                ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                ..record.clone()
            }),
        }
        .map_err(io::Error::other)?;
        writeln!(out, "{}", line)?;
        out.flush()
    }
}
