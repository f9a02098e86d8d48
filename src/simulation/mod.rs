//! Batch simulation: run many games, collect records, report.
//!
//! ## Overview
//!
//! - **Simulation**: validates a `SimulationConfig` and plays the batch
//! - **GameRecord**: per-game `Result`, either statistics or a `GameFault`
//! - **BatchSummary**: mean/min/max/std-dev per field plus win rates
//! - **csv**: writes the result table
//!
//! ## Usage
//!
//! ```
//! use war_sim::core::SimulationConfig;
//! use war_sim::simulation::{BatchSummary, Simulation};
//!
//! let config = SimulationConfig::new().with_seed(7).with_games(5);
//! let simulation = Simulation::new(config).unwrap();
//!
//! let records = simulation.run();
//! assert_eq!(records.len(), 5);
//!
//! let summary = BatchSummary::from_records(&records);
//! println!("{}", summary);
//! ```

pub mod batch;
pub mod csv;
pub mod summary;

pub use batch::{GameFault, GameRecord, Simulation};
pub use csv::{results_file_name, write_results};
pub use summary::{BatchSummary, FieldSummaries, FieldSummary};
