use crate::registry::WordId;
use crate::suffix_tree::SuffixTree;
use crate::symbol::{fold, Symbol};
use proptest::prelude::*;

/// Ids of every word whose folded form contains the folded pattern.
fn naive_search(words: &[String], pattern: &str) -> Vec<WordId> {
    let needle: Vec<Symbol> = fold(pattern).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    words
        .iter()
        .filter(|word| !word.is_empty())
        .enumerate()
        .filter(|(_, word)| {
            let haystack: Vec<Symbol> = fold(word).collect();
            haystack.windows(needle.len()).any(|w| w == needle.as_slice())
        })
        .map(|(id, _)| id)
        .collect()
}

/// Every contiguous substring of the folded word, as a string.
fn folded_substrings(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    let mut substrings = Vec::new();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            substrings.push(chars[start..end].iter().collect());
        }
    }
    substrings
}

proptest! {
    /// Property 1: Completeness
    /// Every substring of every added string finds that string.
    #[test]
    fn prop_every_substring_found(words in prop::collection::vec("[abAB# 1]{0,8}", 0..8)) {
        let mut tree = SuffixTree::new();
        let ids: Vec<Option<WordId>> = words.iter().map(|w| tree.add_string(w)).collect();

        for (word, id) in words.iter().zip(ids) {
            let Some(id) = id else {
                prop_assert!(word.is_empty());
                continue;
            };
            for pattern in folded_substrings(word) {
                let found = tree.search_ids(&pattern);
                prop_assert!(
                    found.contains(&id),
                    "{:?} not found by {:?}",
                    word,
                    pattern
                );
            }
        }
    }

    /// Property 2: No false positives
    /// Search returns exactly the words a naive scan finds.
    #[test]
    fn prop_matches_naive_scan(
        words in prop::collection::vec("[abAB#1]{0,10}", 0..10),
        pattern in "[abAB#1]{0,4}",
    ) {
        let mut tree = SuffixTree::new();
        tree.extend(&words);

        prop_assert_eq!(tree.search_ids(&pattern), naive_search(&words, &pattern));
        prop_assert_eq!(tree.contains(&pattern), !naive_search(&words, &pattern).is_empty());
    }

    /// Property 3: Idempotent reset
    /// A cleared tree behaves like a fresh one.
    #[test]
    fn prop_clear_equals_fresh(
        before in prop::collection::vec("[ab]{0,6}", 0..6),
        after in prop::collection::vec("[ab]{0,6}", 0..6),
        pattern in "[ab]{1,3}",
    ) {
        let mut cleared = SuffixTree::new();
        cleared.extend(&before);
        cleared.clear();
        cleared.extend(&after);

        let mut fresh = SuffixTree::new();
        fresh.extend(&after);

        prop_assert_eq!(cleared.stats(), fresh.stats());
        prop_assert_eq!(cleared.search(&pattern), fresh.search(&pattern));
    }

    /// Property 4: Incremental vs batch equivalence
    /// Adding strings one by one produces the same tree as extend.
    #[test]
    fn prop_incremental_equivalence(words in prop::collection::vec("[a-c]{0,6}", 0..8)) {
        let mut batch = SuffixTree::new();
        batch.extend(&words);

        let mut incremental = SuffixTree::new();
        for word in &words {
            incremental.add_string(word);
        }

        prop_assert_eq!(batch.stats(), incremental.stats());
        for word in &words {
            prop_assert_eq!(batch.search_ids(word), incremental.search_ids(word));
        }
    }

    /// Property 5: Registry fidelity
    /// Every id maps back to the exact string that was added.
    #[test]
    fn prop_word_lookup(words in prop::collection::vec("[a-zA-Z0-9#]{1,6}", 0..8)) {
        let mut tree = SuffixTree::new();
        for (expected, word) in words.iter().enumerate() {
            let id = tree.add_string(word);
            prop_assert_eq!(id, Some(expected));
        }
        for (id, word) in words.iter().enumerate() {
            prop_assert_eq!(tree.word(id), Some(word.as_str()));
        }
        prop_assert_eq!(tree.len(), words.len());
    }
}

/// Bolero fuzz test: No panics on arbitrary input
#[cfg(test)]
#[test]
fn fuzz_no_panic() {
    bolero::check!()
        .with_type::<Vec<String>>()
        .for_each(|words| {
            let mut tree = SuffixTree::new();
            tree.extend(words);

            for word in words {
                let found = tree.search(word);
                if word.is_empty() {
                    assert!(found.is_empty());
                } else {
                    assert!(found.contains(&word.as_str()));
                }
            }
        });
}

/// Bolero fuzz test: Search agrees with a naive scan
#[cfg(test)]
#[test]
fn fuzz_matches_naive_scan() {
    bolero::check!()
        .with_type::<(Vec<String>, String)>()
        .for_each(|(words, pattern)| {
            let mut tree = SuffixTree::new();
            tree.extend(words);

            assert_eq!(tree.search_ids(pattern), naive_search(words, pattern));
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_history_workload() {
        let history = [
            "ls -la",
            "cd projects",
            "git status",
            "git commit -m \"Initial commit\"",
            "cat README.md",
            "git push origin main",
            "cd ..",
        ];

        let mut tree = SuffixTree::new();
        tree.extend(history);

        assert_eq!(
            tree.search("git"),
            vec!["git status", "git commit -m \"Initial commit\"", "git push origin main"]
        );
        assert_eq!(tree.search("cd "), vec!["cd projects", "cd .."]);
        assert_eq!(tree.search("COMMIT"), vec!["git commit -m \"Initial commit\""]);
        assert_eq!(tree.search("readme"), vec!["cat README.md"]);
        assert!(tree.search("rm -rf").is_empty());
    }

    #[test]
    fn test_interleaved_adds_and_searches() {
        let mut tree = SuffixTree::new();
        tree.add_string("abcab");
        assert_eq!(tree.search_ids("ab"), vec![0]);

        tree.add_string("cabca");
        assert_eq!(tree.search_ids("cab"), vec![0, 1]);
        assert_eq!(tree.search_ids("bca"), vec![0, 1]);
        assert_eq!(tree.search_ids("abcab"), vec![0]);
        assert_eq!(tree.search_ids("abca"), vec![0, 1]);

        tree.add_string("b");
        assert_eq!(tree.search_ids("b"), vec![0, 1, 2]);
    }

    #[test]
    fn test_naive_search_oracle() {
        let words = vec!["Banana".to_string(), String::new(), "band".to_string()];
        assert_eq!(naive_search(&words, "BAN"), vec![0, 1]);
        assert_eq!(naive_search(&words, ""), Vec::<WordId>::new());
        assert_eq!(folded_substrings("Ab"), vec!["a", "ab", "b"]);
    }
}
