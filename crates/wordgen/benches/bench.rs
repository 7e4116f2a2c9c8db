use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::io;
use wordgen::{Charset, Emitter, Engine, GenerationConfig, LockEmitter, Partition, generate};

const CHARSET: &str = "abcdefghijklmnopqrstuvwxyz";
const MAX_LEN: usize = 4;

fn config(num_threads: usize, max_lines: Option<u64>) -> GenerationConfig {
    GenerationConfig::builder(CHARSET)
        .min_len(1)
        .max_len(MAX_LEN)
        .max_lines(max_lines)
        .num_threads(num_threads)
        .build()
        .unwrap()
}

/// Counts words without touching any lock, isolating the walk itself.
struct CountOnly;

impl Emitter for CountOnly {
    fn try_emit(&self, word: &str) -> wordgen::Result<wordgen::EmitStatus> {
        black_box(word);
        Ok(wordgen::EmitStatus::Written)
    }
}

fn bench_engine(c: &mut Criterion) {
    let config = config(1, None);
    let total = Charset::from(CHARSET).search_space(1, MAX_LEN).unwrap() as u64;

    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(total));

    group.bench_function("walk/no-lock", |b| {
        b.iter(|| {
            let written = Engine::new(&config, &CountOnly)
                .run(Partition::new(0, 1))
                .unwrap();
            black_box(written)
        })
    });

    group.bench_function("walk/lock-emitter", |b| {
        b.iter(|| {
            let emitter = LockEmitter::new(io::sink(), None);
            let written = Engine::new(&config, &emitter)
                .run(Partition::new(0, 1))
                .unwrap();
            black_box(written)
        })
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let total = Charset::from(CHARSET).search_space(1, MAX_LEN).unwrap() as u64;
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(total));

    let cores = num_cpus::get();
    let mut thread_counts = vec![1, 2, 4, cores];
    thread_counts.sort_unstable();
    thread_counts.dedup();

    for threads in thread_counts {
        let config = config(threads, None);
        group.bench_function(format!("threads/{threads}"), |b| {
            b.iter(|| black_box(generate(&config, io::sink()).unwrap().lines()))
        });
    }

    let capped = config(cores, Some(total / 2));
    group.bench_function(format!("threads/{cores}/capped"), |b| {
        b.iter(|| black_box(generate(&capped, io::sink()).unwrap().lines()))
    });

    group.finish();
}

criterion_group!(benches, bench_engine, bench_generate);
criterion_main!(benches);
