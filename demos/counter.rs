//! Counter with Undo
//!
//! This example demonstrates the basic write/undo/redo cycle on a
//! numeric value.
//!
//! Key concepts:
//! - Every write is recorded, equal values included
//! - Undo and redo are `Option`s - check availability, don't assume it
//! - A write after undo discards the redo branch
//!
//! Run with: cargo run --example counter

use retrace::HistoryState;

fn main() {
    println!("=== Counter with Undo Example ===\n");

    let mut counter = HistoryState::new(0);
    for step in 1..=3 {
        counter.set_state(step * 10);
    }

    println!("Counter after three increments: {}", counter.state());
    println!("Recorded history: {:?}", counter.history());

    while let Some(value) = counter.undo() {
        println!("Undo -> {value}");
    }
    println!("Nothing left to undo (index {})", counter.index());

    while let Some(value) = counter.redo() {
        println!("Redo -> {value}");
    }

    // Rewind once and write: the redo branch is gone.
    counter.undo();
    counter.set_state(99);
    println!("\nAfter undo + write of 99:");
    println!("  state   = {}", counter.state());
    println!("  history = {:?}", counter.history());
    println!("  redo available: {}", counter.can_redo());
}
