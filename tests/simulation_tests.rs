//! Batch simulation integration tests.

use war_sim::core::{ConfigError, SimulationConfig};
use war_sim::games::war::{play_game, Termination};
use war_sim::simulation::{write_results, BatchSummary, Simulation};
use war_sim::PlayerId;

fn config(seed: u64, games: u32) -> SimulationConfig {
    SimulationConfig::new().with_seed(seed).with_games(games)
}

#[test]
fn test_batch_is_reproducible() {
    let first = Simulation::new(config(2024, 10)).unwrap().run();
    let second = Simulation::new(config(2024, 10)).unwrap().run();

    assert_eq!(first, second);
}

#[test]
fn test_batch_seed_changes_results() {
    let first = Simulation::new(config(1, 5)).unwrap().run();
    let second = Simulation::new(config(2, 5)).unwrap().run();

    assert_ne!(first, second);
}

#[test]
fn test_malformed_configs_rejected_before_play() {
    let cases = [
        (config(1, 1).with_hand_time(-500), "hand_time_ms"),
        (config(1, 1).with_shuffle_time(-1), "shuffle_time_ms"),
        (config(1, 1).with_max_game_time(0), "max_game_time_ms"),
    ];
    for (bad, field) in cases {
        let err = Simulation::new(bad).unwrap_err();
        assert!(err.to_string().starts_with(field), "{}", err);
    }

    assert_eq!(Simulation::new(config(1, 0)).unwrap_err(), ConfigError::NoGames);
}

#[test]
fn test_records_are_consistent() {
    let sim = Simulation::new(config(77, 20).with_jokers(true)).unwrap();

    for record in sim.run() {
        let stats = record.unwrap();
        assert_eq!(stats.finished, stats.winner.is_some());
        assert_eq!(stats.finished, stats.termination == Termination::Exhausted);
        assert!(stats.deep_wars <= stats.wars);
        assert!(stats.elapsed_ms >= stats.tricks as u64 * 500);
        assert_eq!(
            stats.trick_wins[PlayerId::A] + stats.trick_wins[PlayerId::B],
            stats.tricks
        );
    }
}

#[test]
fn test_short_budget_leaves_games_unfinished() {
    let sim = Simulation::new(config(5, 10).with_max_game_time(5_000)).unwrap();
    let records = sim.run();
    let summary = BatchSummary::from_records(&records);

    assert_eq!(summary.finished, 0);
    assert_eq!(summary.wins[PlayerId::A] + summary.wins[PlayerId::B], 0);
    assert!(summary.fields.unwrap().tricks.max <= 10.0);
}

#[test]
fn test_fault_does_not_stop_batch() {
    let sim = Simulation::new(config(3, 6)).unwrap();
    let records = sim.run_with(|game, rng| {
        if rng.seed() % 2 == 0 {
            panic!("injected fault");
        }
        play_game(game, rng)
    });

    assert_eq!(records.len(), 6);
    let faulted = records.iter().filter(|r| r.is_err()).count();
    let summary = BatchSummary::from_records(&records);
    assert_eq!(summary.faulted, faulted);
    assert_eq!(summary.games, 6);

    let mut out = Vec::new();
    write_results(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 7);
    assert_eq!(text.lines().filter(|l| l.contains(",-1,")).count(), faulted);
}

#[test]
fn test_replay_single_game() {
    let sim = Simulation::new(config(10, 4)).unwrap();
    let records = sim.run();
    let third = records[2].as_ref().unwrap();

    assert_eq!(&sim.replay(third), third);
}

#[test]
fn test_summary_over_real_batch() {
    let sim = Simulation::new(config(8, 25)).unwrap();
    let summary = BatchSummary::from_records(&sim.run());

    assert_eq!(summary.games, 25);
    assert_eq!(summary.faulted, 0);

    let fields = summary.fields.as_ref().unwrap();
    assert!(fields.tricks.min <= fields.tricks.mean);
    assert!(fields.tricks.mean <= fields.tricks.max);
    assert!(fields.tricks.std_dev >= 0.0);
    assert!(fields.average_war_depth.max >= 1.0 || fields.wars.max == 0.0);

    let text = summary.to_string();
    assert!(text.contains("Game Time (minutes)"));
    assert!(text.contains("Player B wins"));
}
