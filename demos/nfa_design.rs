//! NFA Design
//!
//! This example builds the automaton that accepts strings over {a, b} whose
//! third-from-last symbol is 'b', then checks a few inputs against it.
//!
//! Key concepts:
//! - Rules and rulebooks built with the `rulebook!` macro
//! - One immutable design evaluating many inputs
//! - Stepping an automaton by hand to watch the state set
//! - Checkpointing a run and resuming it
//!
//! Run with: RUST_LOG=trace cargo run --example nfa_design

use multistate::builder::DesignBuilder;
use multistate::checkpoint::Checkpoint;
use multistate::rulebook;

fn main() {
    env_logger::init();

    println!("=== NFA Design Example ===\n");

    let design = DesignBuilder::new()
        .start(1)
        .accept(4)
        .rules(rulebook![
            (1, 'a', 1), (1, 'b', 1), (1, 'b', 2),
            (2, 'a', 3), (2, 'b', 3),
            (3, 'a', 4), (3, 'b', 4),
        ])
        .build()
        .unwrap();

    println!("Rules:");
    for rule in design.rulebook() {
        println!("  {}", rule);
    }

    println!("\nAcceptance:");
    for input in ["bab", "bbbbb", "bbabb", "", "aaaa"] {
        println!("  {:?} -> {}", input, design.accepts_str(input));
    }

    println!("\nStepping through \"bab\":");
    let mut automaton = design.to_automaton();
    println!("  start    {:?}", automaton.current_states());
    for symbol in "bab".chars() {
        automaton.read_character(&symbol);
        println!("  read {:?} {:?}", symbol, automaton.current_states());
    }
    println!("  accepting: {}", automaton.accepting());

    println!("\nCheckpoint after \"bb\", resume with \"ab\":");
    let mut automaton = design.to_automaton();
    automaton.read_string("bb".chars());
    let json = automaton.checkpoint(&design).to_json().unwrap();
    println!("  {}", json);

    let mut resumed = Checkpoint::<i32, char>::from_json(&json)
        .unwrap()
        .resume()
        .unwrap();
    resumed.read_string("ab".chars());
    println!("  accepting: {}", resumed.accepting());

    println!("\n=== Example Complete ===");
}
