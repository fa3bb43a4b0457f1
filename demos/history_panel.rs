//! History Panel
//!
//! This example demonstrates the introspection surface: rendering the
//! full history buffer with a marker at the current index, the way an
//! editor's history sidebar would.
//!
//! Run with: cargo run --example history_panel

use retrace::HistoryState;

fn render_panel(doc: &HistoryState<String>) {
    println!("history ({} entries):", doc.len());
    for (position, entry) in doc.history().iter().enumerate() {
        let marker = if position == doc.index() { ">" } else { " " };
        println!("  {marker} [{position}] {entry}");
    }
    println!(
        "  undo: {}, redo: {}\n",
        doc.can_undo(),
        doc.can_redo()
    );
}

fn main() {
    println!("=== History Panel Example ===\n");

    let mut doc = HistoryState::new("hello".to_string());
    doc.set_state("hello world".to_string());
    doc.set_state("hello world!".to_string());
    render_panel(&doc);

    doc.undo();
    println!("after one undo:");
    render_panel(&doc);

    // Advanced callers may rewrite history wholesale through the raw
    // setters. The container trusts them to keep the index in bounds.
    doc.set_history(vec!["fresh start".to_string()]);
    doc.set_index(0);
    println!("after replacing the buffer:");
    render_panel(&doc);
}
