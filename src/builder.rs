use crate::node::{EdgeEnd, Node, NodeKey, Transition};
use crate::symbol::Symbol;
use slotmap::SlotMap;
use std::ops::Range;

/// The canonical reference pair carried between extension steps.
///
/// `node` is always explicit and `text[start..end]` is the remaining span below
/// it; `end` is the number of text positions processed so far. The point
/// survives across `add_string` calls so construction stays online.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct ActivePoint {
    pub node: NodeKey,
    pub start: usize,
    pub end: usize,
}

impl ActivePoint {
    pub(crate) fn new(root: NodeKey) -> Self {
        Self {
            node: root,
            start: 0,
            end: 0,
        }
    }
}

/// A bundle of references to everything Ukkonen's construction touches.
///
/// The text is borrowed immutably from the registry while the node arena is
/// borrowed mutably from the tree. The algorithm is implemented as methods on
/// this struct.
pub(crate) struct TreeFields<'a> {
    pub nodes: &'a mut SlotMap<NodeKey, Node>,
    pub text: &'a [Symbol],
    pub root: NodeKey,
    pub bottom: NodeKey,
}

impl<'a> TreeFields<'a> {
    /// Integrates the freshly appended positions into the tree.
    ///
    /// Takes the active point left by the previous call and returns the one
    /// the next call must resume from.
    pub fn extend(&mut self, point: ActivePoint, appended: Range<usize>) -> ActivePoint {
        assert_eq!(
            point.end, appended.start,
            "Active point must resume where the previous extension stopped"
        );
        debug_assert_eq!(appended.end, self.text.len());

        // Bottom reaches root over every symbol, so the first step of each
        // phase always finds a transition
        let root = self.root;
        for j in appended.clone() {
            self.nodes[self.bottom]
                .add_transition(self.text[j], Transition::new(root, j, EdgeEnd::Fixed(j)));
        }

        let ActivePoint {
            mut node,
            mut start,
            ..
        } = point;

        for i in appended.clone() {
            (node, start) = self.update(node, start, i);
            (node, start) = self.canonize(node, start, i + 1);
        }

        ActivePoint {
            node,
            start,
            end: appended.end,
        }
    }

    // ========================================================================
    // Ukkonen's Procedures
    // ========================================================================

    /// Adds `text[i]` to every suffix from the active point up to the end point.
    fn update(&mut self, mut node: NodeKey, mut start: usize, i: usize) -> (NodeKey, usize) {
        let symbol = self.text[i];
        let mut old_r = self.root;
        let (mut end_point, mut r) = self.test_and_split(node, start, i, symbol);

        while !end_point {
            let leaf = self.nodes.insert(Node::new());
            self.nodes[r].add_transition(symbol, Transition::new(leaf, i, EdgeEnd::Open));

            if old_r != self.root {
                self.nodes[old_r].suffix_link = Some(r);
            }
            old_r = r;

            let link = self.suffix_link(node);
            (node, start) = self.canonize(link, start, i);
            (end_point, r) = self.test_and_split(node, start, i, symbol);
        }

        if old_r != self.root {
            self.nodes[old_r].suffix_link = Some(node);
        }

        (node, start)
    }

    /// Checks whether the point `(node, text[start..end])` already continues
    /// with `symbol`.
    ///
    /// Returns `(true, node)` when it does. Otherwise returns `false` with the
    /// explicit node a new leaf must hang from, splitting an edge if the point
    /// was implicit.
    fn test_and_split(
        &mut self,
        node: NodeKey,
        start: usize,
        end: usize,
        symbol: Symbol,
    ) -> (bool, NodeKey) {
        if start >= end {
            let present = self.nodes[node].transition(symbol).is_some();
            return (present, node);
        }

        let first = self.text[start];
        let transition = self.transition_from(node, first);
        let split_at = transition.start + (end - start);

        if self.text[split_at] == symbol {
            return (true, node);
        }

        let r = self.nodes.insert(Node::new());
        self.nodes[node].add_transition(
            first,
            Transition::new(r, transition.start, EdgeEnd::Fixed(split_at - 1)),
        );
        self.nodes[r].add_transition(
            self.text[split_at],
            Transition::new(transition.target, split_at, transition.end),
        );

        (false, r)
    }

    /// Walks down every edge fully covered by `text[start..end]`.
    ///
    /// Uses the skip/count trick: only the first symbol of each edge is
    /// inspected, the rest is skipped by length.
    fn canonize(&self, mut node: NodeKey, mut start: usize, end: usize) -> (NodeKey, usize) {
        while start < end {
            let transition = self.transition_from(node, self.text[start]);
            let span = transition.unbounded_end() - transition.start;

            if span > end - 1 - start {
                break;
            }

            start += span + 1;
            node = transition.target;
        }

        (node, start)
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn transition_from(&self, node: NodeKey, first: Symbol) -> Transition {
        *self.nodes[node]
            .transition(first)
            .expect("Active span must follow an existing transition")
    }

    fn suffix_link(&self, node: NodeKey) -> NodeKey {
        self.nodes[node]
            .suffix_link
            .expect("Explicit node on the active path must have a suffix link")
    }
}
