use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use war_sim::core::{GameConfig, GameRng, SimulationConfig};
use war_sim::games::war::{play_game, WarGame};
use war_sim::simulation::Simulation;

fn bench_play_game(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut seed = 0u64;
    c.bench_function("play_game", |b| {
        b.iter(|| {
            seed += 1;
            black_box(play_game(&config, GameRng::new(seed)))
        })
    });
}

fn bench_deal(c: &mut Criterion) {
    let config = GameConfig::default().with_jokers(true);
    c.bench_function("deal", |b| {
        b.iter_batched(
            || GameRng::new(7),
            |rng| black_box(WarGame::new(config.clone(), rng)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_batch(c: &mut Criterion) {
    let sim = Simulation::new(SimulationConfig::new().with_seed(1).with_games(100))
        .expect("valid config");
    c.bench_function("batch_100", |b| b.iter(|| black_box(sim.run())));
}

criterion_group!(benches, bench_play_game, bench_deal, bench_batch);
criterion_main!(benches);
