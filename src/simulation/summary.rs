//! Aggregate statistics over a batch of games.

use serde::{Deserialize, Serialize};

use super::batch::GameRecord;
use crate::core::{PlayerId, PlayerMap};
use crate::games::war::GameStats;

/// Descriptive statistics of one field across games.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl FieldSummary {
    /// Summarize `values`. `None` if there are none.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }

    fn of(games: &[&GameStats], field: impl Fn(&GameStats) -> f64) -> Option<Self> {
        let values: Vec<f64> = games.iter().map(|g| field(*g)).collect();
        Self::from_values(&values)
    }
}

/// Per-field summaries over the games that completed without a fault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSummaries {
    pub tricks: FieldSummary,
    pub wars: FieldSummary,
    pub deep_wars: FieldSummary,
    pub average_war_depth: FieldSummary,
    pub reshuffles: PlayerMap<FieldSummary>,
    pub trick_wins: PlayerMap<FieldSummary>,
    pub game_minutes: FieldSummary,
}

/// Batch-level report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// All games in the batch, faulted ones included.
    pub games: usize,
    pub faulted: usize,
    pub finished: usize,
    pub wins: PlayerMap<usize>,
    /// `None` when no game completed.
    pub fields: Option<FieldSummaries>,
}

impl BatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let completed: Vec<&GameStats> = records.iter().filter_map(|r| r.as_ref().ok()).collect();

        let mut wins: PlayerMap<usize> = PlayerMap::default();
        for winner in completed.iter().filter_map(|g| g.winner) {
            wins[winner] += 1;
        }

        Self {
            games: records.len(),
            faulted: records.len() - completed.len(),
            finished: completed.iter().filter(|g| g.finished).count(),
            wins,
            fields: Self::summarize(&completed),
        }
    }

    fn summarize(games: &[&GameStats]) -> Option<FieldSummaries> {
        Some(FieldSummaries {
            tricks: FieldSummary::of(games, |g| g.tricks as f64)?,
            wars: FieldSummary::of(games, |g| g.wars as f64)?,
            deep_wars: FieldSummary::of(games, |g| g.deep_wars as f64)?,
            average_war_depth: FieldSummary::of(games, GameStats::average_war_depth)?,
            reshuffles: PlayerMap::from_pair(
                FieldSummary::of(games, |g| g.reshuffles[PlayerId::A] as f64)?,
                FieldSummary::of(games, |g| g.reshuffles[PlayerId::B] as f64)?,
            ),
            trick_wins: PlayerMap::from_pair(
                FieldSummary::of(games, |g| g.trick_wins[PlayerId::A] as f64)?,
                FieldSummary::of(games, |g| g.trick_wins[PlayerId::B] as f64)?,
            ),
            game_minutes: FieldSummary::of(games, GameStats::elapsed_minutes)?,
        })
    }

    /// Share of all games that finished, in percent.
    #[must_use]
    pub fn finished_pct(&self) -> f64 {
        percent(self.finished, self.games)
    }

    /// Share of all games won by `player`, in percent.
    #[must_use]
    pub fn win_pct(&self, player: PlayerId) -> f64 {
        percent(self.wins[player], self.games)
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn write_field(f: &mut std::fmt::Formatter<'_>, name: &str, s: &FieldSummary) -> std::fmt::Result {
    writeln!(
        f,
        "{}: Avg {:.2} (Min: {:.0}, Max: {:.0}, StdDev: {:.2})",
        name, s.mean, s.min, s.max, s.std_dev
    )
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total number of games played: {}", self.games)?;
        if self.faulted > 0 {
            writeln!(f, "Faulted games: {}", self.faulted)?;
        }

        if let Some(fields) = &self.fields {
            write_field(f, "Tricks", &fields.tricks)?;
            write_field(f, "Wars", &fields.wars)?;
            write_field(f, "Deep Wars", &fields.deep_wars)?;
            writeln!(
                f,
                "Average War Depth: Avg {:.2} (Min: {:.2}, Max: {:.2}, StdDev: {:.2})",
                fields.average_war_depth.mean,
                fields.average_war_depth.min,
                fields.average_war_depth.max,
                fields.average_war_depth.std_dev
            )?;
            write_field(f, "Shuffles A", &fields.reshuffles[PlayerId::A])?;
            write_field(f, "Shuffles B", &fields.reshuffles[PlayerId::B])?;
            write_field(f, "Tricks Won A", &fields.trick_wins[PlayerId::A])?;
            write_field(f, "Tricks Won B", &fields.trick_wins[PlayerId::B])?;
            let t = &fields.game_minutes;
            writeln!(
                f,
                "Game Time (minutes): Avg {:.2} (Min: {:.2}, Max: {:.2}, StdDev: {:.2})",
                t.mean, t.min, t.max, t.std_dev
            )?;
        }

        writeln!(f, "Finished games: {} ({:.2}%)", self.finished, self.finished_pct())?;
        for player in PlayerId::all() {
            writeln!(
                f,
                "{} wins: {} ({:.2}%)",
                player,
                self.wins[player],
                self.win_pct(player)
            )?;
        }
        Ok(())
    }
}
