use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use concurrent_fifo::{
    backing_stores::{BackingStore, LockfreeQueue, MutexQueue},
    ConcurrentQueue,
};
use crossbeam_queue::SegQueue;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = BenchConfig::parse();
    config.validate()?;
    info!(backing = ?config.backing, "starting benchmark");

    let report = match config.backing {
        Backing::Segqueue => run::<SegQueue<i32>>(&config),
        Backing::ConcurrentQueue => run::<concurrent_queue::ConcurrentQueue<i32>>(&config),
        Backing::Lockfree => run::<LockfreeQueue<i32>>(&config),
        Backing::Mutex => run::<MutexQueue<i32>>(&config),
    };
    report.log(config.duration);
    Ok(())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backing {
    Segqueue,
    ConcurrentQueue,
    Lockfree,
    Mutex,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BenchConfig {
    /// store the queue delegates to.
    #[arg(long, value_enum, default_value_t = Backing::Segqueue)]
    backing: Backing,
    /// number of elements to add to the queue before starting the main
    /// threaded test.
    #[arg(long, default_value_t = 0)]
    prefill: usize,
    /// number of threads pushing elements onto the queue.
    #[arg(long, default_value_t = 0)]
    producer_threads: usize,
    /// number of threads popping elements off the queue.
    #[arg(long, default_value_t = 0)]
    consumer_threads: usize,
    /// number of threads randomly choosing between pushing and popping.
    #[arg(long, default_value_t = 0)]
    mixed_threads: usize,
    /// probability that a mixed thread enqueues rather than dequeues.
    #[arg(long, default_value_t = 0.5)]
    enqueue_ratio: f64,
    /// duration in seconds to run the test
    #[arg(long)]
    duration: usize,
    /// pin every worker thread to its own core.
    #[arg(long)]
    pin_threads: bool,
}

#[derive(Debug, Error)]
enum BenchError {
    #[error("at least one producer, consumer or mixed thread is required")]
    NoThreads,
    #[error("duration must be at least one second")]
    ZeroDuration,
    #[error("enqueue ratio must be within [0, 1], got {0}")]
    InvalidRatio(f64),
}

impl BenchConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.producer_threads + self.consumer_threads + self.mixed_threads == 0 {
            return Err(BenchError::NoThreads);
        }
        if self.duration == 0 {
            return Err(BenchError::ZeroDuration);
        }
        if !(0.0..=1.0).contains(&self.enqueue_ratio) {
            return Err(BenchError::InvalidRatio(self.enqueue_ratio));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Report {
    enqueues: usize,
    dequeues: usize,
    empty_dequeues: usize,
    final_size: usize,
}

impl Report {
    fn log(&self, duration: usize) {
        let operations = self.enqueues + self.dequeues + self.empty_dequeues;
        info!("throughput: {}", operations as f64 / duration as f64);
        info!("number of enqueues: {}", self.enqueues);
        info!("number of dequeues: {}", self.dequeues);
        info!("number of empty dequeues: {}", self.empty_dequeues);
        info!("approximate size at the end: {}", self.final_size);
    }
}

fn run<B>(config: &BenchConfig) -> Report
where
    B: BackingStore<i32> + Sync,
{
    let queue: ConcurrentQueue<i32, B> = ConcurrentQueue::new();
    benchmark_producer_consumer(&queue, config)
}

fn benchmark_producer_consumer<B>(queue: &ConcurrentQueue<i32, B>, config: &BenchConfig) -> Report
where
    B: BackingStore<i32> + Sync,
{
    for i in 0..config.prefill {
        queue.enqueue(i as i32);
    }
    debug!(size = queue.approximate_size(), "prefilled");

    let done: AtomicBool = AtomicBool::new(false);
    let enqueues = AtomicUsize::new(0);
    let dequeues = AtomicUsize::new(0);
    let empty_dequeues = AtomicUsize::new(0);

    let mut cores = if config.pin_threads {
        core_affinity::get_core_ids().unwrap_or_default()
    } else {
        Vec::new()
    }
    .into_iter()
    .cycle();

    thread::scope(|s| {
        let (done, enqueues, dequeues, empty_dequeues) =
            (&done, &enqueues, &dequeues, &empty_dequeues);
        for _ in 0..config.producer_threads {
            let core = cores.next();
            s.spawn(move || {
                pin(core);
                let mut local_enqueues = 0;
                while !done.load(Ordering::Relaxed) {
                    queue.enqueue(405);
                    local_enqueues += 1;
                }
                enqueues.fetch_add(local_enqueues, Ordering::Relaxed);
            });
        }
        for _ in 0..config.consumer_threads {
            let core = cores.next();
            s.spawn(move || {
                pin(core);
                let (mut local_dequeues, mut local_empty) = (0, 0);
                while !done.load(Ordering::Relaxed) {
                    match queue.dequeue() {
                        Some(_) => local_dequeues += 1,
                        None => local_empty += 1,
                    }
                }
                dequeues.fetch_add(local_dequeues, Ordering::Relaxed);
                empty_dequeues.fetch_add(local_empty, Ordering::Relaxed);
            });
        }
        for _ in 0..config.mixed_threads {
            let core = cores.next();
            s.spawn(move || {
                pin(core);
                let mut rng = rand::thread_rng();
                let (mut local_enqueues, mut local_dequeues, mut local_empty) = (0, 0, 0);
                while !done.load(Ordering::Relaxed) {
                    if rng.gen_bool(config.enqueue_ratio) {
                        queue.enqueue(rng.gen());
                        local_enqueues += 1;
                    } else if queue.dequeue().is_some() {
                        local_dequeues += 1;
                    } else {
                        local_empty += 1;
                    }
                }
                enqueues.fetch_add(local_enqueues, Ordering::Relaxed);
                dequeues.fetch_add(local_dequeues, Ordering::Relaxed);
                empty_dequeues.fetch_add(local_empty, Ordering::Relaxed);
            });
        }

        thread::sleep(Duration::from_secs(config.duration as u64));
        done.store(true, Ordering::Relaxed);
    });

    Report {
        enqueues: enqueues.into_inner(),
        dequeues: dequeues.into_inner(),
        empty_dequeues: empty_dequeues.into_inner(),
        final_size: queue.approximate_size(),
    }
}

fn pin(core: Option<core_affinity::CoreId>) {
    if let Some(core) = core {
        if !core_affinity::set_for_current(core) {
            debug!(?core, "could not pin thread");
        }
    }
}
