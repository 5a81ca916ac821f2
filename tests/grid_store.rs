use std::sync::Arc;
use std::thread;

use pixelwar_canvas::canvas::{CanvasError, GridStore};

#[test]
fn new_grid_starts_with_defaults() {
    let store = GridStore::new(4, 1, "#FFFFFF");
    let cells = store.list_all();
    assert_eq!(cells.len(), 4);
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.cell_id, i as u32);
        assert_eq!(cell.color, "#FFFFFF");
        assert_eq!(cell.last_writer_id, None);
        assert_eq!(cell.updated_at, 0);
    }
}

#[test]
fn cell_ids_map_to_fixed_coordinates() {
    let store = GridStore::new(3, 2, "#FFFFFF");
    let cell = store.get(4).unwrap();
    assert_eq!((cell.x, cell.y), (1, 1));
    let cell = store.get(2).unwrap();
    assert_eq!((cell.x, cell.y), (2, 0));
}

#[test]
fn get_out_of_bounds_is_not_found() {
    let store = GridStore::new(2, 2, "#FFFFFF");
    assert_eq!(store.get(4), Err(CanvasError::NotFound { cell_id: 4 }));
}

#[test]
fn commit_out_of_bounds_is_not_found() {
    let store = GridStore::new(2, 2, "#FFFFFF");
    let result = store.commit(7, "#FF0000", "client-a", 1_000);
    assert_eq!(result, Err(CanvasError::NotFound { cell_id: 7 }));
    // nothing mutated
    assert_eq!(store.commit_count(), 0);
}

#[test]
fn commit_stamps_are_strictly_monotonic_per_cell() {
    let store = GridStore::new(2, 1, "#FFFFFF");
    let first = store.commit(0, "#FF0000", "client-a", 100).unwrap();
    // same arrival stamp: tie broken by arrival order
    let second = store.commit(0, "#00FF00", "client-b", 100).unwrap();
    // an earlier stamp can never move the cell's clock backwards
    let third = store.commit(0, "#0000FF", "client-c", 50).unwrap();
    assert_eq!(first.updated_at, 100);
    assert_eq!(second.updated_at, 101);
    assert_eq!(third.updated_at, 102);
    assert_eq!(store.get(0).unwrap().color, "#0000FF");
}

#[test]
fn concurrent_commits_to_one_cell_keep_the_latest_write() {
    let store = Arc::new(GridStore::new(1, 1, "#FFFFFF"));
    let mut handles = Vec::new();
    for t in 0..8u32 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            let writer = format!("writer-{t}");
            let color = format!("#0000{:02X}", t * 16);
            let mut committed = Vec::new();
            for i in 0..200i64 {
                let cell = store.commit(0, &color, &writer, i * 8 + t as i64).unwrap();
                committed.push((cell.updated_at, writer.clone(), color.clone()));
            }
            committed
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.extend(handle.join().unwrap());
    }

    // strict per-cell monotonicity means every commit got a distinct stamp
    let mut stamps: Vec<i64> = results.iter().map(|r| r.0).collect();
    stamps.sort_unstable();
    stamps.dedup();
    assert_eq!(stamps.len(), results.len());

    // the final cell corresponds to the commit with the maximum stamp
    let latest = results.iter().max_by_key(|r| r.0).unwrap();
    let cell = store.get(0).unwrap();
    assert_eq!(cell.updated_at, latest.0);
    assert_eq!(cell.last_writer_id.as_deref(), Some(latest.1.as_str()));
    assert_eq!(cell.color, latest.2);
    assert_eq!(store.commit_count(), results.len() as u64);
}

#[test]
fn commits_to_distinct_cells_are_independent() {
    let store = Arc::new(GridStore::new(8, 1, "#FFFFFF"));
    let mut handles = Vec::new();
    for id in 0..8u32 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            let writer = format!("writer-{id}");
            for i in 0..100i64 {
                store
                    .commit(id, &format!("#00FF{:02X}", id * 16), &writer, i)
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    for id in 0..8u32 {
        let cell = store.get(id).unwrap();
        assert_eq!(cell.color, format!("#00FF{:02X}", id * 16));
        assert_eq!(cell.last_writer_id, Some(format!("writer-{id}")));
    }
}
