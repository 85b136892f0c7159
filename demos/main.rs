use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use suffix_tree_rs::SuffixTree;

/// Indexes every line of a file and checks each line finds itself.
///
/// Usage: cargo run --example main <filename>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let mut tree = SuffixTree::new();
    let mut lines = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line.expect("Error reading file");
        if tree.add_string(&line).is_some() {
            lines.push(line);

            // Print progress every 10,000 lines
            if lines.len() % 10_000 == 0 {
                println!("{}", lines.len());
            }
        }
    }

    // Verify every line is found by searching for itself
    let mut missing = 0;
    for (id, line) in lines.iter().enumerate() {
        if !tree.search_ids(line).contains(&id) {
            eprintln!("Line {} not found: {:?}", id, line);
            missing += 1;
        }
    }

    let stats = tree.stats();

    println!("\n=== Statistics ===");
    println!("Lines indexed: {}", stats.num_words);
    println!("Symbols in text: {}", stats.text_length);
    println!("Nodes: {} ({} leaves)", stats.num_nodes, stats.num_leaves);
    println!("Transitions: {}", stats.num_transitions);
    println!("Nodes per symbol: {:.2}", stats.nodes_per_symbol());
    println!("Lines not found: {}", missing);
}
