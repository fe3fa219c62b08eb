//! Signal Light Machine
//!
//! This example demonstrates a simple cyclic machine with a guard and
//! checkpoint/restore.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Event-driven stepping
//! - Checkpointing a running machine
//!
//! Run with: cargo run --example signal_light

use headway::builder::{event_transition, ChartBuilder};
use headway::machine::Machine;
use headway::{event_enum, state_enum, Checkpoint};

state_enum! {
    enum SignalLight {
        Red,
        Green,
        Amber,
    }
}

event_enum! {
    enum SignalEvent {
        Cycle,
    }
}

fn chart() -> headway::StateChart<SignalLight, SignalEvent> {
    ChartBuilder::new()
        .initial(SignalLight::Red)
        .states([SignalLight::Red, SignalLight::Green, SignalLight::Amber])
        .transitions(vec![
            event_transition(SignalLight::Red, SignalEvent::Cycle, SignalLight::Green),
            event_transition(SignalLight::Green, SignalEvent::Cycle, SignalLight::Amber),
            event_transition(SignalLight::Amber, SignalEvent::Cycle, SignalLight::Red),
        ])
        .build()
        .expect("signal chart is well-formed")
}

fn main() {
    println!("=== Signal Light Machine ===\n");

    let mut machine = Machine::new(chart());
    println!("Initial state: {:?}", machine.current_state());

    for _ in 0..4 {
        machine.send(&SignalEvent::Cycle);
        println!("After Cycle:   {:?}", machine.current_state());
    }

    // Snapshot the machine, ship it somewhere, and resume
    let checkpoint = machine.checkpoint();
    let json = checkpoint.to_json().expect("checkpoint encodes");
    println!("\nCheckpoint: {} bytes of JSON", json.len());

    let decoded = Checkpoint::from_json(&json).expect("checkpoint decodes");
    let restored = Machine::restore(chart(), decoded).expect("checkpoint matches chart");

    println!("Restored state: {:?}", restored.current_state());
    println!("Transitions recorded: {}", restored.log().len());

    println!("\n=== Example Complete ===");
}
