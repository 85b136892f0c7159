//! # Generalized Online Suffix Tree
//!
//! A Rust implementation of an incrementally built generalized suffix tree
//! for case-insensitive substring search over a growing collection of strings,
//! such as a shell's command history.
//!
//! Every added string is case-folded and appended to a single text buffer,
//! followed by a unique delimiter token `#id#`. The tree over that buffer is
//! extended online with Ukkonen's algorithm:
//! 1. **Active Point**: the longest suffix already present is tracked across
//!    additions, so each string only costs its own length
//! 2. **Open Edges**: leaf edges grow with the text without being rewritten
//!
//! A search walks the pattern from the root and then collects the delimiter
//! of every path below the match point to recover which strings contain it.
//!
//! ## Example
//!
//! ```
//! use suffix_tree_rs::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! tree.add_string("git commit -m 'fix'");
//! tree.add_string("git push");
//! tree.add_string("cargo test");
//!
//! assert_eq!(tree.search("GIT"), vec!["git commit -m 'fix'", "git push"]);
//! assert!(tree.search("svn").is_empty());
//! ```
//!
//! ## Performance
//!
//! - Amortized O(n) construction over the total length of all added strings
//! - Search is O(m) to locate a pattern of length m, plus the size of the
//!   subtree below the match
//! - Nodes live in a SlotMap arena addressed by stable keys

mod builder;
mod node;
mod registry;
mod search;
mod suffix_tree;
mod symbol;

#[cfg(test)]
mod tests;

pub use registry::WordId;
pub use suffix_tree::{SuffixTree, TreeStats};
