//! Result table output.
//!
//! One row per game. Every column is numeric or boolean, so no quoting
//! is needed. A faulted game is written as a sentinel row with
//! `Tricks = -1`.

use std::io::{self, Write};

use super::batch::GameRecord;
use crate::core::{PlayerId, SimulationConfig};

/// Column headers, in order.
pub const HEADERS: [&str; 12] = [
    "Game Number",
    "Tricks",
    "Wars",
    "Deep Wars",
    "Average War Depth",
    "Shuffles A",
    "Shuffles B",
    "Game Duration (ms)",
    "Finished",
    "Tricks Won A",
    "Tricks Won B",
    "Winner",
];

/// File name encoding the batch parameters.
#[must_use]
pub fn results_file_name(config: &SimulationConfig) -> String {
    format!(
        "war_results_hand{}_shuffle{}_jokers{}_seed{}_games{}_maxtime{}.csv",
        config.hand_time_ms,
        config.shuffle_time_ms,
        config.include_jokers,
        config.seed,
        config.games,
        config.max_game_time_ms
    )
}

/// Write the header and one row per record.
pub fn write_results<W: Write>(mut out: W, records: &[GameRecord]) -> io::Result<()> {
    writeln!(out, "{}", HEADERS.join(","))?;
    for record in records {
        match record {
            Ok(g) => writeln!(
                out,
                "{},{},{},{},{:.4},{},{},{},{},{},{},{}",
                g.game_number,
                g.tricks,
                g.wars,
                g.deep_wars,
                g.average_war_depth(),
                g.reshuffles[PlayerId::A],
                g.reshuffles[PlayerId::B],
                g.elapsed_ms,
                g.finished,
                g.trick_wins[PlayerId::A],
                g.trick_wins[PlayerId::B],
                g.winner.map(PlayerId::label).unwrap_or_default(),
            )?,
            Err(fault) => writeln!(out, "{},-1,0,0,0.0000,0,0,0,false,0,0,", fault.game_number)?,
        }
    }
    out.flush()
}
