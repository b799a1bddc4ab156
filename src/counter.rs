use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;

use crate::primality::is_prime;
use crate::shared_types::{ChunkRange, PrimeCount};

pub(crate) struct PassOutcome {
    pub(crate) count: PrimeCount,
    pub(crate) elapsed: Duration,
}

pub(crate) struct ParallelOutcome {
    pub(crate) count: PrimeCount,
    pub(crate) elapsed: Duration,
    pub(crate) workers: usize,
}

pub(crate) fn count_sequential(numbers: &[i64]) -> PrimeCount {
    numbers.iter().filter(|&&n| is_prime(n)).count()
}

pub(crate) fn run_sequential(numbers: &[i64]) -> PassOutcome {
    let start = Instant::now();
    let count = count_sequential(numbers);
    PassOutcome {
        count,
        elapsed: start.elapsed(),
    }
}

/// Splits `[0, len)` into `workers` contiguous chunks of `len / workers`
/// elements each; the last chunk absorbs the remainder. When `workers`
/// exceeds `len` the trailing chunks are empty, which is fine: an empty
/// chunk counts zero primes.
pub(crate) fn chunk_ranges(len: usize, workers: usize) -> Vec<ChunkRange> {
    debug_assert!(workers >= 1);
    let chunk = len / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { len } else { start + chunk };
            ChunkRange { start, end }
        })
        .collect()
}

/// Counts primes with one worker thread per chunk over the shared read-only
/// list. The elapsed time covers spawn, compute and join, matching what a
/// caller of the whole parallel phase would observe.
pub(crate) fn run_parallel(numbers: Arc<[i64]>, workers: usize) -> ParallelOutcome {
    let workers = workers.max(1);
    let ranges = chunk_ranges(numbers.len(), workers);
    debug!("counting over {} chunks: {:?}", ranges.len(), ranges);
    let empty = ranges.iter().filter(|r| r.is_empty()).count();
    if empty > 0 {
        debug!("{empty} chunks are empty and will count zero primes");
    }

    // Sized to the worker count so every send completes without blocking,
    // even though the channel is only drained after the join below.
    let (s_counts, r_counts) = mpsc::sync_channel::<PrimeCount>(workers);

    let start = Instant::now();
    let handles: Vec<JoinHandle<()>> = ranges
        .iter()
        .map(|&range| spawn_count_worker(Arc::clone(&numbers), range, s_counts.clone()))
        .collect();
    drop(s_counts);

    for handle in handles {
        handle.join().expect("count worker panicked");
    }
    let count = r_counts.iter().sum();

    ParallelOutcome {
        count,
        elapsed: start.elapsed(),
        workers,
    }
}

fn spawn_count_worker(
    numbers: Arc<[i64]>,
    range: ChunkRange,
    s_counts: mpsc::SyncSender<PrimeCount>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let count = count_sequential(&numbers[range.start..range.end]);
        debug!("found {count} primes in {} numbers", range.len());
        s_counts.send(count).expect("send failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn chunks_cover_range_exactly() {
        let ranges = chunk_ranges(10, 3);
        assert_eq!(
            ranges,
            vec![
                ChunkRange { start: 0, end: 3 },
                ChunkRange { start: 3, end: 6 },
                ChunkRange { start: 6, end: 10 },
            ]
        );
    }

    #[test]
    fn more_workers_than_elements_gives_empty_chunks() {
        // Floor division gives a chunk size of zero, so the last chunk
        // absorbs the whole list.
        let ranges = chunk_ranges(3, 8);
        assert_eq!(ranges.len(), 8);
        assert!(ranges[..7].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[7], ChunkRange { start: 0, end: 3 });
    }

    #[test]
    fn empty_list_partitions_into_empty_chunks() {
        let ranges = chunk_ranges(0, 4);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn sequential_counts_known_list() {
        assert_eq!(count_sequential(&[2, 3, 4, 17]), 3);
        assert_eq!(count_sequential(&[]), 0);
        assert_eq!(count_sequential(&[-2, 0, 1]), 0);
    }

    #[test]
    fn parallel_matches_sequential_on_sample() {
        let numbers: Arc<[i64]> = vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 7919].into();
        let sequential = count_sequential(&numbers);
        for workers in [1, 2, 4, 16] {
            let outcome = run_parallel(Arc::clone(&numbers), workers);
            assert_eq!(outcome.count, sequential);
            assert_eq!(outcome.workers, workers);
        }
    }

    #[test]
    fn parallel_on_empty_list_counts_zero() {
        let numbers: Arc<[i64]> = Vec::new().into();
        assert_eq!(run_parallel(numbers, 8).count, 0);
    }

    proptest! {
        #[test]
        fn chunks_concatenate_to_full_range(len in 0usize..500, workers in 1usize..32) {
            let ranges = chunk_ranges(len, workers);
            prop_assert_eq!(ranges.len(), workers);
            let mut next = 0;
            for range in &ranges {
                prop_assert_eq!(range.start, next);
                prop_assert!(range.end >= range.start);
                next = range.end;
            }
            prop_assert_eq!(next, len);
        }

        #[test]
        fn parallel_count_equals_sequential(
            numbers in proptest::collection::vec(-1000i64..100_000, 0..200),
            workers in 1usize..12,
        ) {
            let expected = count_sequential(&numbers);
            let shared: Arc<[i64]> = numbers.into();
            prop_assert_eq!(run_parallel(shared, workers).count, expected);
        }
    }
}
