use crate::builder::{ActivePoint, TreeFields};
use crate::node::{Node, NodeKey};
use crate::registry::{WordId, WordRegistry};
use slotmap::SlotMap;

/// Generalized online suffix tree over a growing collection of strings.
///
/// Every added string is case-folded, appended to a shared text buffer
/// followed by its unique `#id#` delimiter, and integrated into the tree with
/// Ukkonen's online construction. Searching a substring returns every added
/// string that contains it.
///
/// # Example
///
/// ```rust
/// use suffix_tree_rs::SuffixTree;
///
/// let mut tree = SuffixTree::new();
/// tree.add_string("banana");
/// tree.add_string("band");
///
/// assert_eq!(tree.search("BAN"), vec!["banana", "band"]);
/// assert_eq!(tree.search("ana"), vec!["banana"]);
/// assert!(tree.search("not_in_tree").is_empty());
/// ```
///
/// Mutation and search must not interleave; the tree exposes no locking and
/// relies on `&mut self` for exclusive construction.
#[derive(Debug)]
pub struct SuffixTree {
    /// Storage for all nodes, never shrinks
    pub(crate) nodes: SlotMap<NodeKey, Node>,

    /// Text buffer and word-id mapping
    pub(crate) registry: WordRegistry,

    /// Entry point for search
    pub(crate) root: NodeKey,

    /// Construction-only auxiliary node, target of root's suffix link
    pub(crate) bottom: NodeKey,

    /// Where the next extension resumes
    point: ActivePoint,
}

impl SuffixTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::from_registry(WordRegistry::new())
    }

    /// Creates an empty tree whose text buffer is pre-sized for `symbols`
    /// positions (folded characters plus delimiters).
    pub fn with_capacity(symbols: usize) -> Self {
        Self::from_registry(WordRegistry::with_capacity(symbols))
    }

    fn from_registry(registry: WordRegistry) -> Self {
        let mut nodes = SlotMap::with_key();
        let (root, bottom) = insert_root(&mut nodes);

        Self {
            nodes,
            registry,
            root,
            bottom,
            point: ActivePoint::new(root),
        }
    }

    /// Adds a string to the index.
    ///
    /// Returns the new word-id, or `None` for the empty string, which is
    /// ignored. Adding the same content twice registers it under two ids.
    pub fn add_string(&mut self, word: &str) -> Option<WordId> {
        let (id, appended) = self.registry.add(word)?;

        let mut fields = TreeFields {
            nodes: &mut self.nodes,
            text: &self.registry.text,
            root: self.root,
            bottom: self.bottom,
        };
        self.point = fields.extend(self.point, appended);

        Some(id)
    }

    /// Adds every string of an iterator, in order.
    pub fn extend<I, S>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in iter {
            self.add_string(word.as_ref());
        }
    }

    /// Returns the original string registered under `id`.
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.registry.lookup(id)
    }

    /// Returns the number of strings added.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if no strings have been added.
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Resets the tree to the state of a freshly constructed one.
    ///
    /// Allocations of the text buffer and the node arena are kept.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.nodes.clear();

        let (root, bottom) = insert_root(&mut self.nodes);
        self.root = root;
        self.bottom = bottom;
        self.point = ActivePoint::new(root);
    }

    /// Returns statistics about the tree.
    pub fn stats(&self) -> TreeStats {
        let mut leaves = 0;
        let mut transitions = 0;

        for (key, node) in self.nodes.iter() {
            if key == self.bottom {
                continue;
            }
            if node.is_leaf() {
                leaves += 1;
            }
            transitions += node.transitions.len();
        }

        TreeStats {
            num_words: self.registry.len(),
            text_length: self.registry.text.len(),
            num_nodes: self.nodes.len() - 1,
            num_leaves: leaves,
            num_transitions: transitions,
        }
    }

    /// Index of the last text position, which open edges resolve to.
    pub(crate) fn last_index(&self) -> usize {
        self.registry.text.len().saturating_sub(1)
    }
}

/// Inserts root and bottom, with root's suffix link pointing at bottom.
fn insert_root(nodes: &mut SlotMap<NodeKey, Node>) -> (NodeKey, NodeKey) {
    let root = nodes.insert(Node::new());
    let bottom = nodes.insert(Node::new());
    nodes[root].suffix_link = Some(bottom);
    (root, bottom)
}

/// Statistics about the tree.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TreeStats {
    /// Number of strings added
    pub num_words: usize,
    /// Symbols in the text buffer, delimiters included
    pub text_length: usize,
    /// Nodes reachable from the root, root included
    pub num_nodes: usize,
    /// Nodes without outgoing edges
    pub num_leaves: usize,
    /// Edges below the root
    pub num_transitions: usize,
}

impl TreeStats {
    /// Average number of nodes per indexed symbol.
    pub fn nodes_per_symbol(&self) -> f64 {
        if self.text_length == 0 {
            0.0
        } else {
            self.num_nodes as f64 / self.text_length as f64
        }
    }
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}
