use std::fmt;

/// The kind of a validation failure. Every rule reports through one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    MissingTag,
    UnknownTag,
    MissingDevTag,
    MultipleDevTags,
    ReleaseTagOnTopicBranch,
    MissingReleaseTag,
    MultipleReleaseTags,
    DevTagOnMainlineBranch,
    MissingVersionDigits,
    MalformedVersion,
    VersionMismatch,
    MissingChangelogUpdate,
    MissingReadmeOrIndexUpdate,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FindingKind::MissingTag => "missing-tag",
            FindingKind::UnknownTag => "unknown-tag",
            FindingKind::MissingDevTag => "missing-dev-tag",
            FindingKind::MultipleDevTags => "multiple-dev-tags",
            FindingKind::ReleaseTagOnTopicBranch => "release-tag-on-topic-branch",
            FindingKind::MissingReleaseTag => "missing-release-tag",
            FindingKind::MultipleReleaseTags => "multiple-release-tags",
            FindingKind::DevTagOnMainlineBranch => "dev-tag-on-mainline-branch",
            FindingKind::MissingVersionDigits => "missing-version-digits",
            FindingKind::MalformedVersion => "malformed-version",
            FindingKind::VersionMismatch => "version-mismatch",
            FindingKind::MissingChangelogUpdate => "missing-changelog-update",
            FindingKind::MissingReadmeOrIndexUpdate => "missing-readme-or-index-update",
        };
        write!(f, "{}", name)
    }
}

/// One reported failure: the offending commit(s), the rule that fired and a
/// human-readable explanation carrying the tag/version values behind it.
///
/// Findings are keyed by commit sha rather than message text so that two
/// commits sharing a message never overwrite each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Shas of the commits this finding is attributed to. Usually one;
    /// the aggregate manifest check attributes to several.
    pub commits: Vec<String>,
    /// The commit message (first line is enough for rendering).
    pub message: String,
    pub kind: FindingKind,
    /// Explanation with the values that justify the finding.
    pub detail: String,
}

impl Finding {
    pub fn new(
        sha: impl Into<String>,
        message: impl Into<String>,
        kind: FindingKind,
        detail: impl Into<String>,
    ) -> Self {
        Finding {
            commits: vec![sha.into()],
            message: message.into(),
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first_line = self.message.lines().next().unwrap_or("");
        write!(
            f,
            "[{}] commit(s) {}: {} ({})",
            self.kind,
            self.commits.join(", "),
            self.detail,
            first_line
        )
    }
}

/// Ordered collection of findings for one pull request. Empty means pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        ValidationReport::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }
}
