use crate::node::Transition;
use crate::registry::WordId;
use crate::suffix_tree::SuffixTree;
use crate::symbol::{fold, Symbol};
use ahash::AHashSet as HashSet;

/// The position where a matched pattern ends.
///
/// May lie inside an edge: `next` is the index of the first label symbol of
/// `transition` not consumed by the pattern.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchPoint {
    pub transition: Transition,
    pub next: usize,
}

/// Progress through a delimiter token along one path of the harvest.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Delimiter {
    /// Still inside the matched word
    Before,
    /// Opening sigil seen, digits read so far
    Digits(WordId),
}

/// One pending edge of the harvest worklist.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    transition: Transition,
    next: usize,
    delimiter: Delimiter,
}

/// Iterator over the word-ids found below a match point.
///
/// Walks the subtree with an explicit stack, so depth is bounded by the heap
/// rather than the call stack. Each path yields the id of the first delimiter
/// it completes; an id is yielded once per distinct path, so the same id can
/// appear several times.
pub(crate) struct WordIds<'a> {
    tree: &'a SuffixTree,
    stack: Vec<Frontier>,
    last: usize,
}

impl<'a> WordIds<'a> {
    pub(crate) fn new(tree: &'a SuffixTree, point: MatchPoint) -> Self {
        Self {
            tree,
            stack: vec![Frontier {
                transition: point.transition,
                next: point.next,
                delimiter: Delimiter::Before,
            }],
            last: tree.last_index(),
        }
    }

    /// Reads the rest of an edge label, returning the id if a delimiter
    /// closes on it.
    fn scan_edge(&self, item: &mut Frontier) -> Option<WordId> {
        let end = item.transition.end.or(self.last);
        let text = &self.tree.registry.text;
        assert!(
            end < text.len() && item.next <= end + 1,
            "Edge label {}..={} out of text bounds {}",
            item.next,
            end,
            text.len()
        );

        for &symbol in &text[item.next..=end] {
            item.delimiter = match (item.delimiter, symbol) {
                (Delimiter::Before, Symbol::Char(_)) => Delimiter::Before,
                (Delimiter::Before, Symbol::Sigil) => Delimiter::Digits(0),
                (Delimiter::Digits(id), Symbol::Sigil) => return Some(id),
                (Delimiter::Digits(id), Symbol::Digit(d)) => {
                    Delimiter::Digits(id * 10 + usize::from(d))
                }
                (state, symbol) => panic!(
                    "Malformed delimiter token: {:?} while reading {:?}",
                    symbol, state
                ),
            };
        }

        None
    }
}

impl<'a> Iterator for WordIds<'a> {
    type Item = WordId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut item) = self.stack.pop() {
            if let Some(id) = self.scan_edge(&mut item) {
                return Some(id);
            }

            let target = &self.tree.nodes[item.transition.target];
            assert!(
                !target.is_leaf(),
                "Every path below a match must reach a closing delimiter"
            );

            for transition in target.transitions.values() {
                self.stack.push(Frontier {
                    transition: *transition,
                    next: transition.start,
                    delimiter: item.delimiter,
                });
            }
        }

        None
    }
}

impl SuffixTree {
    /// Returns every added string containing `pattern`, case-insensitively.
    ///
    /// Strings are returned in insertion order. An empty pattern matches
    /// nothing.
    pub fn search(&self, pattern: &str) -> Vec<&str> {
        self.search_ids(pattern)
            .into_iter()
            .map(|id| {
                self.registry
                    .lookup(id)
                    .expect("Harvested word-id must be registered")
            })
            .collect()
    }

    /// Returns the ids of every added string containing `pattern`, ascending.
    pub fn search_ids(&self, pattern: &str) -> Vec<WordId> {
        let Some(point) = self.locate(pattern) else {
            return Vec::new();
        };

        let unique: HashSet<WordId> = WordIds::new(self, point).collect();
        let mut ids: Vec<WordId> = unique.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns true if any added string contains `pattern`.
    ///
    /// Only walks the pattern; the subtree below the match is not visited.
    pub fn contains(&self, pattern: &str) -> bool {
        self.locate(pattern).is_some()
    }

    /// Walks the folded pattern down from the root.
    pub(crate) fn locate(&self, pattern: &str) -> Option<MatchPoint> {
        let pattern: Vec<Symbol> = fold(pattern).collect();
        if pattern.is_empty() {
            return None;
        }

        let text = &self.registry.text;
        let last = self.last_index();
        let mut node = self.root;
        let mut matched = 0;

        loop {
            let transition = *self.nodes[node].transition(pattern[matched])?;
            let end = transition.end.or(last);
            let mut index = transition.start;

            while index <= end && matched < pattern.len() {
                if text[index] != pattern[matched] {
                    return None;
                }
                index += 1;
                matched += 1;
            }

            if matched == pattern.len() {
                return Some(MatchPoint {
                    transition,
                    next: index,
                });
            }

            node = transition.target;
        }
    }
}
