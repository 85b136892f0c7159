use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use suffix_tree_rs::SuffixTree;

/// Cycles through the matches of a reverse history search.
///
/// Every change of the query re-runs the search and resets the selection;
/// stepping wraps around at either end.
struct ReverseSearch<'a> {
    tree: &'a SuffixTree,
    query: String,
    results: Vec<&'a str>,
    selected: Option<usize>,
}

impl<'a> ReverseSearch<'a> {
    fn new(tree: &'a SuffixTree) -> Self {
        Self {
            tree,
            query: String::new(),
            results: Vec::new(),
            selected: None,
        }
    }

    fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
        self.results = self.tree.search(query);
        self.selected = None;
        self.step(false);
    }

    /// Moves to the previous (older) match, or the next one when `forward`.
    fn step(&mut self, forward: bool) {
        let len = self.results.len();
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match (self.selected, forward) {
            (None, false) => len - 1,
            (None, true) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        });
    }

    fn prompt(&self) -> String {
        let current = self.selected.map(|i| self.results[i]).unwrap_or("");
        format!("(reverse-i-search)`{}': {}", self.query, current)
    }
}

/// Reverse history search over the lines of a file.
///
/// Reads queries from stdin: a plain line sets the query, `>` steps to the
/// next match and `<` to the previous one.
///
/// Usage: cargo run --example history <history-file>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <history-file>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let mut tree = SuffixTree::new();
    for line in BufReader::new(file).lines() {
        tree.add_string(&line.expect("Error reading file"));
    }
    println!("Indexed {} history entries", tree.len());

    let mut search = ReverseSearch::new(&tree);
    for line in io::stdin().lock().lines() {
        let line = line.expect("Error reading stdin");
        match line.as_str() {
            ">" => search.step(true),
            "<" => search.step(false),
            query => search.set_query(query),
        }
        println!("{}", search.prompt());
    }
}
