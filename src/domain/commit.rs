use crate::domain::version::VersionTuple;
use regex::Regex;

/// One commit from a pull request, with its per-file diffs when the detail
/// fetch materialized them. `files == None` means detail was never fetched;
/// the engine treats that as unavailable input where a rule needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    pub parent_count: usize,
    pub files: Option<Vec<FileDiff>>,
}

impl CommitRecord {
    /// Merge commits are never validated.
    pub fn is_merge(&self) -> bool {
        self.parent_count > 1
    }

    /// Commits whose message starts with the literal word "Revert" are
    /// excluded from all checks.
    pub fn is_revert(&self) -> bool {
        self.message.split(' ').next() == Some("Revert")
    }

    /// Short form of the sha for display.
    pub fn short_sha(&self) -> &str {
        if self.sha.len() > 7 {
            &self.sha[..7]
        } else {
            &self.sha
        }
    }
}

/// A single changed file within a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDiff {
    pub filename: String,
    pub patch: Option<String>,
    pub raw_content: Option<String>,
}

/// Outcome of extracting a version pair from a file diff.
///
/// Distinguishes "touched with an extractable version change" from "touched
/// but no parsable version delta"; the latter is not an error, it just means
/// there is nothing to compare.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionDelta {
    Changed {
        before: VersionTuple,
        after: VersionTuple,
    },
    TouchedOnly,
}

fn version_pattern() -> Regex {
    // 5-field alternative first so manifest versions are not truncated
    Regex::new(r"\d+\.\d+\.\d+\.\d+\.\d+|\d+\.\d+\.\d+").expect("static version pattern")
}

fn first_version_in(text: &str) -> Option<VersionTuple> {
    version_pattern()
        .find(text)
        .and_then(|m| VersionTuple::parse(m.as_str()).ok())
}

impl FileDiff {
    /// Extract the before/after version pair from this file's patch.
    ///
    /// The new version is the first version on an added line. The old version
    /// is taken from removed lines, then from context lines (a changelog adds
    /// its new entry above the previous one, so the previous release shows up
    /// as context), then from the raw file content as a last resort.
    pub fn version_delta(&self) -> VersionDelta {
        let patch = match &self.patch {
            Some(p) => p,
            None => return VersionDelta::TouchedOnly,
        };

        let mut added: Option<VersionTuple> = None;
        let mut removed: Option<VersionTuple> = None;
        let mut context: Option<VersionTuple> = None;

        for line in patch.lines() {
            if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@") {
                continue;
            }
            let (slot, body) = if let Some(rest) = line.strip_prefix('+') {
                (&mut added, rest)
            } else if let Some(rest) = line.strip_prefix('-') {
                (&mut removed, rest)
            } else {
                (&mut context, line)
            };
            if slot.is_none() {
                *slot = first_version_in(body);
            }
        }

        let after = match added {
            Some(v) => v,
            None => return VersionDelta::TouchedOnly,
        };

        let before = removed
            .or(context)
            .or_else(|| self.first_distinct_in_raw(&after));

        match before {
            // Mixed tuple lengths in one file are not a comparable pair
            Some(before) if before.len() == after.len() => {
                VersionDelta::Changed { before, after }
            }
            _ => VersionDelta::TouchedOnly,
        }
    }

    fn first_distinct_in_raw(&self, after: &VersionTuple) -> Option<VersionTuple> {
        let raw = self.raw_content.as_deref()?;
        version_pattern()
            .find_iter(raw)
            .filter_map(|m| VersionTuple::parse(m.as_str()).ok())
            .find(|v| v != after)
    }
}
