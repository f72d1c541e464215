//! # Snapshot Consistency Under Concurrent Publish
//!
//! Readers hammer a [`CatalogHandle`] while a writer keeps swapping between
//! two very different indexes. Every snapshot a reader sees must be one of
//! the two complete indexes, with its lookup table matching its records.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use elcat_core::{CatalogEntry, CatalogHandle, CatalogIndex, Election, ElectionUid};

fn index_of(prefix: &str, count: usize) -> CatalogIndex {
    CatalogIndex::build((0..count).map(|i| {
        CatalogEntry::new(
            format!("{prefix}-{i}.json"),
            Election::new(ElectionUid::new(format!("{prefix}-{i}")).unwrap(), prefix),
        )
    }))
}

fn assert_whole(index: &CatalogIndex) {
    match index.len() {
        0 => assert_eq!(index.distinct_identifiers(), 0),
        400 => {
            for e in index.records() {
                assert_eq!(e.name, "old");
            }
        }
        150 => {
            for e in index.records() {
                assert_eq!(e.name, "new");
            }
        }
        other => panic!("observed a partial snapshot with {other} records"),
    }
    assert_eq!(index.distinct_identifiers(), index.len());
    for e in index.records() {
        let expected = format!("{}.json", e.election_uid);
        assert_eq!(index.file_for(e.election_uid.as_str()), Some(expected.as_str()));
    }
}

#[test]
fn readers_never_observe_a_mixed_snapshot() {
    let handle = CatalogHandle::new();
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = handle.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut seen = 0u64;
                while !stop.load(Ordering::Relaxed) {
                    assert_whole(&handle.snapshot());
                    seen += 1;
                }
                seen
            })
        })
        .collect();

    for round in 0..200 {
        if round % 2 == 0 {
            handle.publish(index_of("old", 400));
        } else {
            handle.publish(index_of("new", 150));
        }
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
    assert_eq!(handle.generation(), 200);
    assert_whole(&handle.snapshot());
}

#[test]
fn file_lookup_during_publish_resolves_against_one_snapshot() {
    let handle = CatalogHandle::new();
    handle.publish(index_of("old", 10));

    let writer = {
        let handle = handle.clone();
        thread::spawn(move || {
            for round in 0..500 {
                let prefix = if round % 2 == 0 { "new" } else { "old" };
                handle.publish(index_of(prefix, 10));
            }
        })
    };

    for _ in 0..5_000 {
        if let Some(file) = handle.file_for("old-3") {
            assert_eq!(file, "old-3.json");
        }
        if let Some(file) = handle.file_for("new-3") {
            assert_eq!(file, "new-3.json");
        }
    }
    writer.join().expect("writer thread panicked");
}
