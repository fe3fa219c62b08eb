//! Editor Undo Session
//!
//! This example demonstrates the undo stack and the delay-coalescing
//! wrapper a text editor would use for keystroke saves.
//!
//! Key concepts:
//! - Duplicate suppression and depth bounding
//! - Redo-tail truncation on save
//! - Coalescing rapid saves behind a delay
//!
//! Run with: cargo run --example editor_undo

use headway::undo::{DeferredUndoStack, UndoStack};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Editor Undo Session ===\n");

    let mut history = UndoStack::new().max_depth(50);

    history.save("fn main() {}".to_string());
    history.save("fn main() { println!(); }".to_string());
    history.save("fn main() { println!(\"hi\"); }".to_string());

    println!("Snapshots held: {}", history.len());
    println!("Current: {:?}", history.current());

    println!("\nUndo twice, then type something new:");
    history.undo();
    history.undo();
    println!("Current: {:?}", history.current());

    history.save("fn main() { eprintln!(); }".to_string());
    println!("Current: {:?} (redo tail dropped)", history.current());
    println!("Can redo: {}", history.can_redo());

    println!("\nKeystroke saves coalesce behind a delay:");
    let mut live = DeferredUndoStack::new(
        UndoStack::new().max_depth(50),
        Duration::from_millis(25),
    );

    for text in ["f", "fn", "fn ", "fn m"] {
        live.schedule(text.to_string());
    }
    tokio::time::sleep(Duration::from_millis(80)).await;

    println!("Snapshots committed: {} (only the last keystroke)", live.len());
    println!("Current: {:?}", live.current());

    println!("\n=== Example Complete ===");
}
