//! Grouping of raw search hits into an ordered file → matches tree.
//!
//! [`ResultIndex::build`] consumes `git grep -n` output lines and groups them by
//! filename in first-seen order. The index is read-only afterwards; which groups
//! are expanded lives in an [`OpenSet`] owned by the navigator, and the index
//! answers "what occupies visible row N" for a given open set.
//!
//! # Public API
//! - [`MatchRecord`]: One parsed `file:line:text` hit
//! - [`FileGroup`]: All hits for one file, in output order
//! - [`ResultIndex`]: Ordered groups plus row arithmetic
//! - [`RowRef`]: Result of resolving a visible row
//! - [`OpenSet`]: Set of expanded group indices

use crate::core::error::{GitGrepError, Result};
use std::collections::{BTreeSet, HashMap};

/// Indices of the file groups that are currently expanded
pub type OpenSet = BTreeSet<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub filename: String,
    /// Kept as text so the original formatting width survives
    pub line_number: String,
    pub text: String,
}

impl MatchRecord {
    /// Split a raw line on its first two colons. Any further colons belong to the text.
    ///
    /// Git still C-quotes names containing a tab, newline, `"` or `\`; such a
    /// filename is unquoted and the split starts after its closing quote.
    pub fn parse(raw: &str) -> Result<Self> {
        let (filename, rest) = match raw.strip_prefix('"') {
            Some(quoted) => {
                let (filename, rest) =
                    unquote_c_style(quoted).ok_or_else(|| GitGrepError::parse_error(raw))?;
                let rest = rest
                    .strip_prefix(':')
                    .ok_or_else(|| GitGrepError::parse_error(raw))?;
                (filename, rest)
            }
            None => match raw.split_once(':') {
                Some((filename, rest)) => (filename.to_string(), rest),
                None => return Err(GitGrepError::parse_error(raw)),
            },
        };

        match rest.split_once(':') {
            Some((line_number, text)) => Ok(MatchRecord {
                filename,
                line_number: line_number.to_string(),
                text: text.to_string(),
            }),
            None => Err(GitGrepError::parse_error(raw)),
        }
    }
}

/// Decode a C-style quoted name whose opening quote is already stripped.
/// Returns the name and whatever follows the closing quote.
fn unquote_c_style(quoted: &str) -> Option<(String, &str)> {
    let bytes = quoted.as_bytes();
    let mut name = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let name = String::from_utf8_lossy(&name).into_owned();
                return Some((name, &quoted[i + 1..]));
            }
            b'\\' => {
                let escaped = *bytes.get(i + 1)?;
                i += 2;
                let byte = match escaped {
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b't' => b'\t',
                    b'n' => b'\n',
                    b'v' => 0x0b,
                    b'f' => 0x0c,
                    b'r' => b'\r',
                    b'0'..=b'3' => {
                        let digits = bytes.get(i - 1..i + 2)?;
                        i += 2;
                        digits.iter().try_fold(0u8, |acc, d| match d {
                            b'0'..=b'7' => Some(acc * 8 + (d - b'0')),
                            _ => None,
                        })?
                    }
                    other => other,
                };
                name.push(byte);
            }
            other => {
                name.push(other);
                i += 1;
            }
        }
    }

    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub filename: String,
    pub matches: Vec<MatchRecord>,
}

impl FileGroup {
    fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            matches: Vec::new(),
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Widest line number in the group, used to align the text column
    pub fn line_number_width(&self) -> usize {
        self.matches
            .iter()
            .map(|m| m.line_number.len())
            .max()
            .unwrap_or(0)
    }
}

/// What a visible row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    Header(usize),
    Match(usize, usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultIndex {
    groups: Vec<FileGroup>,
}

impl ResultIndex {
    /// Group raw lines by filename, keeping first-seen file order and the
    /// original order of matches within each file.
    pub fn build<I, S>(raw_lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: Vec<FileGroup> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for raw in raw_lines {
            let record = MatchRecord::parse(raw.as_ref())?;
            let position = match positions.get(&record.filename) {
                Some(&position) => position,
                None => {
                    groups.push(FileGroup::new(&record.filename));
                    positions.insert(record.filename.clone(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[position].matches.push(record);
        }

        log::debug!(
            "Built result index: {} groups, {} matches",
            groups.len(),
            groups.iter().map(FileGroup::match_count).sum::<usize>()
        );

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_matches(&self) -> usize {
        self.groups.iter().map(FileGroup::match_count).sum()
    }

    /// Number of visible rows: one per header plus the bodies of open groups
    pub fn row_count(&self, open: &OpenSet) -> usize {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                if open.contains(&i) {
                    1 + group.match_count()
                } else {
                    1
                }
            })
            .sum()
    }

    /// Map a visible row to the header or match displayed there
    pub fn resolve(&self, row: usize, open: &OpenSet) -> Result<RowRef> {
        let mut remaining = row;
        for (i, group) in self.groups.iter().enumerate() {
            if remaining == 0 {
                return Ok(RowRef::Header(i));
            }
            remaining -= 1;

            if open.contains(&i) {
                if remaining < group.match_count() {
                    return Ok(RowRef::Match(i, remaining));
                }
                remaining -= group.match_count();
            }
        }

        Err(GitGrepError::row_out_of_range(row, self.row_count(open)))
    }

    pub fn record(&self, group: usize, entry: usize) -> Option<&MatchRecord> {
        self.groups.get(group).and_then(|g| g.matches.get(entry))
    }
}
