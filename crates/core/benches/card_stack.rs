use std::sync::Arc;

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swipedeck_core::{stack_geometry, CardStackEngine, ProfileFetcher, ProfileStore};
use swipedeck_domain::{FetchError, GestureConfig, Profile, Translation};

fn sample_profiles(count: i64) -> Vec<Profile> {
    (0..count)
        .map(|id| {
            Profile::new(id)
                .with_name(format!("user-{id}"))
                .with_email(format!("user{id}@mail.com"))
                .with_avatar(format!("https://i.imgur.com/{id}.jpeg"))
        })
        .collect()
}

struct StaticFetcher {
    profiles: Vec<Profile>,
}

#[async_trait]
impl ProfileFetcher for StaticFetcher {
    async fn fetch(&self) -> Result<Vec<Profile>, FetchError> {
        Ok(self.profiles.clone())
    }
}

fn card_stack_benchmark(c: &mut Criterion) {
    let profiles = sample_profiles(50);

    let mut group = c.benchmark_group("card_stack");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("stack_geometry", |b| {
        b.iter(|| stack_geometry(black_box(&profiles)));
    });

    group.bench_function("drag_cycle", |b| {
        let mut engine = CardStackEngine::new(GestureConfig::default());
        let top = profiles.last().map(|p| p.id).expect("non-empty stack");

        b.iter(|| {
            engine.on_drag_start(&profiles, top);
            for step in 1..=20 {
                engine.on_drag_change(Translation::new(f64::from(step) * 5.0, 2.0));
                black_box(engine.render(&profiles));
            }
            engine.on_drag_end(&profiles)
        });
    });

    group.bench_function("load_and_drain", |b| {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let fetcher = Arc::new(StaticFetcher { profiles: profiles.clone() });

        b.iter(|| {
            let fetcher = Arc::clone(&fetcher);
            runtime.block_on(async move {
                let mut store = ProfileStore::new();
                store.load(fetcher.as_ref()).await;
                while let Some(id) = store.top().map(|p| p.id) {
                    store.remove(id);
                }
            });
        });
    });

    group.finish();
}

criterion_group!(core_benchmarks, card_stack_benchmark);
criterion_main!(core_benchmarks);
