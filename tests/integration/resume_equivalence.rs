//! Stopping at any comparison and restoring from the saved JSON must not
//! change the final ranking. Merge sort continues with exactly the remaining
//! questions; binary insertion restarts the insertion that was under way, so
//! it re-asks at most that walk's earlier questions.

use rankly::snapshot::{restore, SortState};
use rankly::sort::{Algorithm, Engine, SortEngine, Step};

/// Lower value is better, but with a scrambled starting order.
fn scrambled(n: usize) -> Vec<u32> {
    (0..n as u32).map(|i| (i * 7 + 3) % n as u32).collect()
}

/// Every comparison asked and the final order, answering "lower wins".
fn transcript(engine: &mut Engine<u32>, first: Option<bool>) -> (Vec<(u32, u32)>, Vec<u32>) {
    let mut asked = Vec::new();
    let mut step = engine.next(first).unwrap();
    loop {
        match step {
            Step::Done(result) => return (asked, result),
            Step::Compare(c) => {
                asked.push((c.left, c.right));
                step = engine.next(Some(c.left < c.right)).unwrap();
            }
        }
    }
}

fn check_every_suspension_point(algorithm: Algorithm, n: usize) {
    let items = scrambled(n);
    let mut full = Engine::new(algorithm, items.clone()).unwrap();
    let (full_asked, full_result) = transcript(&mut full, None);
    let mut sorted = items.clone();
    sorted.sort();
    assert_eq!(full_result, sorted, "{} over {} items", algorithm, n);

    for stop in 0..full_asked.len() {
        let mut engine = Engine::new(algorithm, items.clone()).unwrap();
        let mut step = engine.next(None).unwrap();
        for _ in 0..stop {
            let Step::Compare(c) = step else {
                panic!("finished early at {}", stop);
            };
            step = engine.next(Some(c.left < c.right)).unwrap();
        }
        assert!(!step.is_done());

        let json = engine.snapshot().unwrap().to_json().unwrap();
        let state = SortState::<u32>::from_json(&json).unwrap();
        assert_eq!(state.algorithm(), algorithm);
        assert_eq!(state.item_count(), n);

        let mut resumed = restore(state).unwrap();
        let (tail, result) = transcript(&mut resumed, None);
        let context = format!(
            "{} over {} items, stopped after {} answers",
            algorithm, n, stop
        );
        match algorithm {
            Algorithm::Merge => assert_eq!(tail.as_slice(), &full_asked[stop..], "{}", context),
            Algorithm::BinaryInsertion => {
                let repeated = tail.len() - (full_asked.len() - stop);
                assert!(
                    full_asked[..stop].ends_with(&tail[..repeated]),
                    "{}",
                    context
                );
                assert_eq!(&tail[repeated..], &full_asked[stop..], "{}", context);
                let bound = rankly::tree::balance::minimum_height(n);
                assert!(repeated <= bound, "{}", context);
            }
        }
        assert_eq!(result, full_result, "{}", context);
    }
}

#[test]
fn test_binary_insertion_resumes_at_every_point() {
    for n in [2, 3, 5, 8, 13] {
        check_every_suspension_point(Algorithm::BinaryInsertion, n);
    }
}

#[test]
fn test_merge_resumes_at_every_point() {
    for n in [2, 3, 5, 8, 13] {
        check_every_suspension_point(Algorithm::Merge, n);
    }
}

#[test]
fn test_snapshot_does_not_alias_engine() {
    for algorithm in [Algorithm::BinaryInsertion, Algorithm::Merge] {
        let mut engine = Engine::new(algorithm, scrambled(6)).unwrap();
        let Step::Compare(c) = engine.next(None).unwrap() else {
            panic!("expected a comparison");
        };
        let before = engine.snapshot().unwrap();
        let frozen = before.clone();
        engine.next(Some(c.left < c.right)).unwrap();
        assert_eq!(before, frozen);
        assert_ne!(
            engine.snapshot(),
            Some(before),
            "{} state should move on",
            algorithm
        );
    }
}

#[test]
fn test_restored_engine_repeats_pending_comparison() {
    for algorithm in [Algorithm::BinaryInsertion, Algorithm::Merge] {
        let mut engine = Engine::new(algorithm, scrambled(5)).unwrap();
        let first = engine.next(None).unwrap();
        let mut restored = restore(engine.snapshot().unwrap()).unwrap();
        assert_eq!(restored.next(None).unwrap(), first);
    }
}

#[test]
fn test_no_snapshot_after_finish() {
    for algorithm in [Algorithm::BinaryInsertion, Algorithm::Merge] {
        let mut engine = Engine::new(algorithm, scrambled(4)).unwrap();
        transcript(&mut engine, None);
        assert!(engine.snapshot().is_none());
    }
}
