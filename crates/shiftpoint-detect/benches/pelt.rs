// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shiftpoint_core::Signal;
use shiftpoint_costs::new_cost;
use shiftpoint_detect::Pelt;

fn step_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let level = (i / (n / 4).max(1)) as f64 * 3.0;
            level + ((i * 37) % 17) as f64 * 0.01
        })
        .collect()
}

fn bench_pelt_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("pelt_predict");

    for n in [256usize, 1024] {
        let values = step_signal(n);

        for model in ["l1", "l2", "rbf", "entropy"] {
            let cost = new_cost(model).expect("registered model should construct");
            let mut pelt = Pelt::new(cost, 2, 1).expect("detector should build");
            pelt.fit(Signal::from_univariate(&values).expect("signal should be valid"))
                .expect("fit should succeed");

            group.bench_function(format!("{model}/n={n}"), |b| {
                b.iter(|| {
                    let breakpoints = pelt.predict(black_box(10.0)).expect("predict");
                    black_box(breakpoints)
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pelt_models);
criterion_main!(benches);
