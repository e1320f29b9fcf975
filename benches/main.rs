use bst_map::{CircularQueue, OrderedMap};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rng, seq::SliceRandom};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn shuffled_keys(size: usize) -> Vec<usize> {
    let mut keys = (0..size).collect::<Vec<_>>();

    keys.shuffle(&mut rng());

    keys
}

fn bench_ordered_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_map");

    for size in SIZES {
        let keys = shuffled_keys(size);
        let map = keys.iter().map(|&key| (key, key)).collect::<OrderedMap<_, _>>();

        group.bench_with_input(BenchmarkId::new("insert_random", size), &keys, |b, keys| {
            b.iter_batched(
                OrderedMap::new,
                |mut map| {
                    for &key in keys {
                        map.insert(key, key);
                    }

                    map
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("contains", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(map.contains(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("remove", size), &keys, |b, keys| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }

                    map
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("for_each", size), &map, |b, map| {
            b.iter(|| {
                map.for_each(|key, value| {
                    black_box((key, value));
                })
            })
        });

        group.bench_with_input(BenchmarkId::new("iter", size), &map, |b, map| {
            b.iter(|| {
                for entry in map {
                    black_box(entry);
                }
            })
        });
    }

    // Sorted keys degenerate the tree into a list.
    for size in [100, 1_000] {
        group.bench_with_input(BenchmarkId::new("insert_sorted", size), &size, |b, &size| {
            b.iter_batched(
                OrderedMap::new,
                |mut map| {
                    for key in 0..size {
                        map.insert(key, key);
                    }

                    map
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_circular_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_queue");

    for capacity in [8, 1_024] {
        group.bench_with_input(
            BenchmarkId::new("push_pop_cycle", capacity),
            &capacity,
            |b, &capacity| {
                let mut queue = CircularQueue::new(capacity);

                b.iter(|| {
                    for value in 0..10_000u64 {
                        if queue.is_full() {
                            black_box(queue.pop());
                        }

                        black_box(queue.push(value).is_ok());
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_ordered_map, bench_circular_queue);
criterion_main!(benches);
