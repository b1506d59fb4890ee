//! Shared test utilities for gitgrep integration tests.
//!
//! Repositories are created in temporary directories with the real `git`
//! binary so that searches exercise actual `git grep` output.

pub mod assertions;
pub mod fixtures;
pub mod repository;
