//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for the missing repository error message
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Checks for the empty result message
pub fn no_matches(pattern: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("No matches for '{pattern}'"))
}

/// Checks for a file group header with its result count
pub fn has_group_header(filename: &str, count: usize) -> impl Predicate<str> {
    let plural = if count > 1 { "s" } else { "" };
    predicates::str::contains(format!("  {filename} ({count} result{plural})"))
}

/// Checks for a search backend failure
pub fn search_failed() -> impl Predicate<str> {
    predicates::str::contains("Search failed")
}
