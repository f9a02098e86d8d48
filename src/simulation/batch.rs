//! Batch driver: plays many games with one configuration.
//!
//! Each game runs on its own RNG stream forked from the batch seed, so a
//! batch is reproducible as a whole and any single game can be replayed
//! from its recorded seed. A game that panics is contained: it becomes a
//! [`GameFault`] record and the batch carries on.

use std::panic::{self, AssertUnwindSafe};

use log::{info, warn};
use thiserror::Error;

use crate::core::{ConfigError, GameConfig, GameRng, SimulationConfig};
use crate::games::war::{play_game, GameStats};

/// A game that failed with an unexpected runtime fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("game {game_number} faulted: {message}")]
pub struct GameFault {
    /// 1-based position in the batch.
    pub game_number: u32,
    /// Seed of the game's RNG stream.
    pub seed: u64,
    pub message: String,
}

/// Outcome of one game in a batch.
pub type GameRecord = Result<GameStats, GameFault>;

/// A validated batch of games.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    game: GameConfig,
}

impl Simulation {
    /// Validate `config`. Nothing is played until [`Simulation::run`].
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let game = config.validate()?;
        Ok(Self { config, game })
    }

    /// The batch configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The per-game configuration derived from it.
    pub fn game_config(&self) -> &GameConfig {
        &self.game
    }

    /// Play every game in order.
    pub fn run(&self) -> Vec<GameRecord> {
        self.run_with(play_game)
    }

    /// Play every game with a custom game function.
    ///
    /// `play` receives the per-game config and that game's RNG stream.
    /// A panic inside `play` is recorded as a [`GameFault`].
    pub fn run_with<F>(&self, mut play: F) -> Vec<GameRecord>
    where
        F: FnMut(&GameConfig, GameRng) -> GameStats,
    {
        info!(
            "starting simulation of {} games (seed {}, jokers {})",
            self.config.games, self.config.seed, self.game.include_jokers
        );

        let mut rng = GameRng::new(self.config.seed);
        let records: Vec<GameRecord> = (1..=self.config.games)
            .map(|game_number| {
                let game_rng = rng.fork();
                let seed = game_rng.seed();

                let outcome = panic::catch_unwind(AssertUnwindSafe(|| play(&self.game, game_rng)));
                match outcome {
                    Ok(mut stats) => {
                        stats.game_number = game_number;
                        Ok(stats)
                    }
                    Err(payload) => {
                        let fault = GameFault {
                            game_number,
                            seed,
                            message: panic_message(payload.as_ref()),
                        };
                        warn!("{}", fault);
                        Err(fault)
                    }
                }
            })
            .collect();

        let faulted = records.iter().filter(|r| r.is_err()).count();
        info!("simulation finished: {} games, {} faulted", records.len(), faulted);
        records
    }

    /// Play one game of this batch again from its recorded seed.
    pub fn replay(&self, stats: &GameStats) -> GameStats {
        let mut replayed = play_game(&self.game, GameRng::new(stats.seed));
        replayed.game_number = stats.game_number;
        replayed
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_batch(games: u32) -> Simulation {
        Simulation::new(SimulationConfig::new().with_seed(42).with_games(games)).unwrap()
    }

    #[test]
    fn test_rejects_bad_config() {
        let err = Simulation::new(SimulationConfig::new().with_games(0)).unwrap_err();
        assert_eq!(err, ConfigError::NoGames);
    }

    #[test]
    fn test_run_numbers_games() {
        let records = small_batch(5).run();

        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            let stats = record.as_ref().unwrap();
            assert_eq!(stats.game_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_games_use_distinct_streams() {
        let records = small_batch(3).run();
        let seeds: Vec<_> = records.iter().map(|r| r.as_ref().unwrap().seed).collect();

        assert_ne!(seeds[0], seeds[1]);
        assert_ne!(seeds[1], seeds[2]);
    }

    #[test]
    fn test_fault_is_contained() {
        let mut batch_rng = GameRng::new(42);
        let _ = batch_rng.fork();
        let second = batch_rng.fork().seed();

        let sim = small_batch(4);
        let records = sim.run_with(|config, rng| {
            if rng.seed() == second {
                panic!("bad game");
            }
            play_game(config, rng)
        });

        assert_eq!(records.len(), 4);
        assert!(records[0].is_ok());
        assert_eq!(records[1].as_ref().unwrap_err().seed, second);
        assert!(records[2].is_ok());
        assert!(records[3].is_ok());
    }

    #[test]
    fn test_fault_records_message() {
        let sim = small_batch(3);
        let mut calls = 0;
        let records = sim.run_with(|config, rng| {
            calls += 1;
            if calls == 2 {
                panic!("pile underflow");
            }
            play_game(config, rng)
        });

        let fault = records[1].as_ref().unwrap_err();
        assert_eq!(fault.game_number, 2);
        assert_eq!(fault.message, "pile underflow");
        assert_eq!(fault.to_string(), "game 2 faulted: pile underflow");
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_replay_matches() {
        let sim = small_batch(3);
        let records = sim.run();

        for record in &records {
            let stats = record.as_ref().unwrap();
            assert_eq!(&sim.replay(stats), stats);
        }
    }

    #[test]
    fn test_panic_message_formats() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");

        let boxed: Box<dyn std::any::Any + Send> = Box::new(17u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}
