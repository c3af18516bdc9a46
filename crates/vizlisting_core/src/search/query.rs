//! Pure query evaluator for the listing filter.
//!
//! Matching rules, pinned by the listing page behavior:
//! - The query splits on whitespace into terms; a name splits into tokens.
//! - Comparison is case-insensitive; stored names are never mutated.
//! - A term matches when some token *starts with* it. A mid-token substring
//!   does not match: `orld` misses `World` even though it is contained in it.
//! - All terms must match (AND); different terms may match different tokens.
//! - A zero-term query matches every item.
//!
//! # Invariants
//! - Evaluation is stateless and never touches the store; filtering a
//!   snapshot twice with the same query yields the same result in the same
//!   order.

use crate::model::visualization::Visualization;

/// Splits text on whitespace into case-folded pieces.
///
/// Consecutive whitespace yields no empty pieces, so a query of blanks
/// produces zero terms and a whitespace-only name produces zero tokens.
/// Used for both query terms and name tokens so the two sides always fold
/// identically.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|piece| piece.to_lowercase())
        .collect()
}

/// Returns whether a single folded term matches any of the folded tokens.
///
/// Prefix match only: the term must appear at a token start.
pub fn term_matches(term: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|token| token.starts_with(term))
}

/// Returns whether a name satisfies every term of a tokenized query.
///
/// Zero terms match every name. A name with no tokens (empty or
/// whitespace-only) can only satisfy the zero-term query.
pub fn name_matches(name: &str, terms: &[String]) -> bool {
    let tokens = tokenize(name);
    terms.iter().all(|term| term_matches(term, &tokens))
}

/// Filters a listing snapshot down to the items matching `raw_query`.
///
/// Input order is preserved; the snapshot itself is never mutated.
pub fn search<'a>(items: &'a [Visualization], raw_query: &str) -> Vec<&'a Visualization> {
    let terms = tokenize(raw_query);
    items
        .iter()
        .filter(|item| name_matches(&item.name, &terms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{name_matches, term_matches, tokenize};

    #[test]
    fn tokenize_folds_case_and_drops_empty_pieces() {
        assert_eq!(tokenize("Hello  World"), vec!["hello", "world"]);
        assert_eq!(tokenize("  MIXED Case \t"), vec!["mixed", "case"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn term_matches_requires_token_prefix() {
        let tokens = tokenize("Hello World");
        assert!(term_matches("hello", &tokens));
        assert!(term_matches("wor", &tokens));
        assert!(term_matches("w", &tokens));
        assert!(!term_matches("orld", &tokens));
        assert!(!term_matches("ello", &tokens));
    }

    #[test]
    fn term_longer_than_every_token_matches_nothing() {
        let tokens = tokenize("Hello World");
        assert!(!term_matches("worldwide", &tokens));
        assert!(!term_matches("helloooo", &tokens));
    }

    #[test]
    fn name_matches_requires_all_terms() {
        assert!(name_matches("Hello World", &tokenize("hello world")));
        assert!(name_matches("Hello World", &tokenize("wor hel")));
        assert!(!name_matches("Hello World", &tokenize("hello banana")));
    }

    #[test]
    fn one_token_can_satisfy_multiple_terms() {
        assert!(name_matches("Hello World", &tokenize("wo wor world")));
    }

    #[test]
    fn zero_terms_match_any_name_including_blank_ones() {
        let no_terms = tokenize("   ");
        assert!(no_terms.is_empty());
        assert!(name_matches("Hello World", &no_terms));
        assert!(name_matches("", &no_terms));
        assert!(name_matches("   ", &no_terms));
    }

    #[test]
    fn blank_name_matches_no_non_empty_term() {
        assert!(!name_matches("", &tokenize("hello")));
        assert!(!name_matches("  \t ", &tokenize("h")));
    }
}
