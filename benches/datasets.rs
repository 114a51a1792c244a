use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use playground_data::DatasetKind;
use playground_data::Grid;
use playground_data::POINT_DOMAIN;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

pub fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for kind in DatasetKind::ALL {
        let mut rng = Pcg64::seed_from_u64(0);
        group.bench_function(kind.name(), |b| {
            b.iter(|| kind.generate_with_count(black_box(10_000), 0.2, &mut rng))
        });
    }
}

pub fn bench_boundary(c: &mut Criterion) {
    let nodes = playground_data::input_nodes();
    let mut group = c.benchmark_group("update_decision_boundary");
    for density in [25, 50, 100, 200] {
        let grid = Grid::new(density, POINT_DOMAIN).unwrap();
        group.bench_function(&density.to_string(), |b| {
            b.iter(|| {
                playground_data::update_decision_boundary(None, black_box(grid), &nodes, None, false)
            })
        });
    }
}

criterion_group!(benches, bench_generators, bench_boundary);
criterion_main!(benches);
