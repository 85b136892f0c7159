use crate::symbol::Symbol;
use ahash::AHashMap as HashMap;

slotmap::new_key_type! {
    /// Stable handle of a node in the tree's arena.
    pub(crate) struct NodeKey;
}

/// End bound of an edge label.
///
/// Leaf edges all grow with the text, so instead of rewriting each of them on
/// every append they carry `Open` and are resolved against the current end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum EdgeEnd {
    /// Inclusive index of the last label symbol.
    Fixed(usize),

    /// The label runs to the current end of the text.
    Open,
}

impl EdgeEnd {
    /// Resolves the bound, substituting `open` for an open edge.
    #[inline]
    pub(crate) fn or(self, open: usize) -> usize {
        match self {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open => open,
        }
    }
}

/// An outgoing edge: target node plus the label `text[start..=end]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transition {
    pub target: NodeKey,
    pub start: usize,
    pub end: EdgeEnd,
}

impl Transition {
    pub(crate) fn new(target: NodeKey, start: usize, end: EdgeEnd) -> Self {
        Self { target, start, end }
    }

    /// Inclusive end during construction, where open edges are unbounded.
    #[inline]
    pub(crate) fn unbounded_end(&self) -> usize {
        self.end.or(usize::MAX)
    }
}

/// A node of the tree.
///
/// Outgoing edges are keyed by the first symbol of their label, which keeps at
/// most one edge per distinct first symbol.
#[derive(Debug, Default)]
pub(crate) struct Node {
    pub transitions: HashMap<Symbol, Transition>,

    /// Only followed during construction
    pub suffix_link: Option<NodeKey>,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the edge starting with `first`.
    pub(crate) fn add_transition(&mut self, first: Symbol, transition: Transition) {
        self.transitions.insert(first, transition);
    }

    pub(crate) fn transition(&self, first: Symbol) -> Option<&Transition> {
        self.transitions.get(&first)
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.transitions.is_empty()
    }
}
