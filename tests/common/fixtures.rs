//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use gitgrep::core::error::Result;

/// Scenario: two source files mentioning `needle`, one file without it.
///
/// `src/main.rs` has matches on lines 2 and 10, `notes.txt` on line 1
/// (with a colon inside the matched text).
pub fn create_search_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_tracked_file(
        &repo.path,
        "src/main.rs",
        "fn main() {\n    let needle = 1;\n    let a = 2;\n    let b = 3;\n    let c = 4;\n    let d = 5;\n    let e = 6;\n    let f = 7;\n    let g = 8;\n    println!(\"{}\", needle);\n}\n",
    )?;
    create_tracked_file(&repo.path, "notes.txt", "needle: find it\nhaystack\n")?;
    create_tracked_file(&repo.path, "README.md", "nothing to see\n")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}
