//! The validation engine: tag classification, branch policy, version-bump
//! and documentation checks over a materialized sequence of commits.

pub mod branch_policy;
pub mod classifier;
pub mod docs;
pub mod report;
pub mod version_check;

pub use report::{Finding, FindingKind, ValidationReport};

use crate::config::Config;
use crate::domain::{BranchKind, CommitRecord, FileDiff, ReleaseClass, Tag, VersionDelta, VersionTuple};
use crate::engine::classifier::Classification;
use crate::engine::version_check::ManifestContribution;
use crate::error::{Result, TagCheckError};

/// Runs every check over the commits of one pull request.
///
/// The engine is synchronous and stateless across runs; all latency-bearing
/// work (fetching diffs, raw contents) happens before it is invoked. Findings
/// accumulate, they never abort the run; the only error is missing input.
pub struct ValidationEngine {
    config: Config,
}

impl ValidationEngine {
    /// Create an engine with the given vocabulary/file/policy configuration.
    pub fn new(config: Config) -> Self {
        ValidationEngine { config }
    }

    /// Validate a pull request's commits against the branch it targets.
    ///
    /// `target_version` is the caller-supplied version the pull request is
    /// expected to release, when the CI environment provides one.
    pub fn validate(
        &self,
        branch_name: &str,
        target_version: Option<&str>,
        commits: &[CommitRecord],
    ) -> Result<ValidationReport> {
        let branch = BranchKind::classify(branch_name);
        let mut report = ValidationReport::new();

        if let Some(raw) = target_version {
            if !raw.is_empty() && VersionTuple::parse(raw).is_err() {
                report.push(Finding {
                    commits: vec![],
                    message: raw.to_string(),
                    kind: FindingKind::MalformedVersion,
                    detail: format!(
                        "Target version '{}' is not a 3- or 5-field dotted version",
                        raw
                    ),
                });
            }
        }

        for commit in commits {
            if commit.is_merge() || commit.is_revert() {
                continue;
            }
            self.validate_commit(commit, branch, &mut report)?;
        }

        if self.config.policy.aggregate_manifest {
            self.reconcile_manifest(commits, &mut report);
        }

        Ok(report)
    }

    fn validate_commit(
        &self,
        commit: &CommitRecord,
        branch: BranchKind,
        report: &mut ValidationReport,
    ) -> Result<()> {
        let vocab = &self.config.vocabulary;

        let tags = match classifier::classify(&commit.message, vocab) {
            Classification::Tags(tags) => tags,
            Classification::Failed { kind, detail } => {
                // No valid tag set exists; skip the remaining checks for this
                // commit only.
                report.push(Finding::new(&commit.sha, &commit.message, kind, detail));
                return Ok(());
            }
        };

        for violation in branch_policy::evaluate(&tags, branch, vocab) {
            report.push(Finding::new(
                &commit.sha,
                &commit.message,
                violation.kind,
                violation.detail,
            ));
        }

        if let Some((class, tag)) = self.release_class_of(&tags) {
            let files = commit.files.as_ref().ok_or_else(|| {
                TagCheckError::input(format!(
                    "commit {} carries {} but its file diffs were never fetched",
                    commit.short_sha(),
                    tag.name
                ))
            })?;

            let changed: Vec<String> = files.iter().map(|f| f.filename.clone()).collect();
            for violation in docs::check(
                class,
                &tag.name,
                &changed,
                &self.config.files,
                &self.config.policy,
            ) {
                report.push(Finding::new(
                    &commit.sha,
                    &commit.message,
                    violation.kind,
                    violation.detail,
                ));
            }

            if let Some(changelog) = self.find_file(files, &self.config.files.changelog) {
                if let VersionDelta::Changed { before, after } = changelog.version_delta() {
                    if let Some(detail) = version_check::validate_bump(
                        class,
                        &before,
                        &after,
                        &changelog.filename,
                        &tag.name,
                    ) {
                        report.push(Finding::new(
                            &commit.sha,
                            &commit.message,
                            FindingKind::VersionMismatch,
                            detail,
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Second pass: the manifest version must reflect the aggregate effect of
    /// every release-class commit in the pull request.
    fn reconcile_manifest(&self, commits: &[CommitRecord], report: &mut ValidationReport) {
        // contributions grouped per manifest file, in first-seen order
        let mut manifests: Vec<(String, Vec<ManifestContribution>)> = Vec::new();

        for commit in commits {
            if commit.is_merge() || commit.is_revert() {
                continue;
            }
            let tags = match classifier::classify(&commit.message, &self.config.vocabulary) {
                Classification::Tags(tags) => tags,
                Classification::Failed { .. } => continue,
            };
            let Some((class, tag)) = self.release_class_of(&tags) else {
                continue;
            };
            let Some(files) = commit.files.as_ref() else {
                // already reported as unavailable input in the first pass
                continue;
            };

            for file in files {
                if !file.filename.contains(&self.config.files.manifest_suffix) {
                    continue;
                }
                let contribution = ManifestContribution {
                    sha: commit.sha.clone(),
                    message: commit.message.clone(),
                    tag_name: tag.name.clone(),
                    class,
                    delta: file.version_delta(),
                };
                match manifests.iter_mut().find(|(name, _)| *name == file.filename) {
                    Some((_, contributions)) => contributions.push(contribution),
                    None => manifests.push((file.filename.clone(), vec![contribution])),
                }
            }
        }

        for (manifest_name, contributions) in &manifests {
            if let Some(finding) = version_check::validate_aggregate(contributions, manifest_name)
            {
                report.push(finding);
            }
        }
    }

    fn find_file<'a>(&self, files: &'a [FileDiff], name: &str) -> Option<&'a FileDiff> {
        files.iter().find(|f| f.filename.contains(name))
    }

    fn release_class_of<'a>(&self, tags: &'a [Tag]) -> Option<(ReleaseClass, &'a Tag)> {
        tags.iter()
            .find_map(|t| t.release_class(&self.config.vocabulary).map(|c| (c, t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(sha: &str, message: &str, files: Option<Vec<FileDiff>>) -> CommitRecord {
        CommitRecord {
            sha: sha.to_string(),
            message: message.to_string(),
            parent_count: 1,
            files,
        }
    }

    fn file(name: &str, patch: Option<&str>) -> FileDiff {
        FileDiff {
            filename: name.to_string(),
            patch: patch.map(|p| p.to_string()),
            raw_content: None,
        }
    }

    #[test]
    fn test_dev_commit_on_topic_branch_passes() {
        let engine = ValidationEngine::new(Config::default());
        let commits = vec![commit("a1", ":memo: Update notes", None)];
        let report = engine.validate("12.0-feature", None, &commits).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_merge_and_revert_commits_are_skipped() {
        let engine = ValidationEngine::new(Config::default());
        let mut merge = commit("m1", "no tags at all", None);
        merge.parent_count = 2;
        let revert = commit("r1", "Revert \":zap: speed up\"", None);
        let report = engine.validate("12.0", None, &[merge, revert]).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_classifier_failure_short_circuits_commit_checks() {
        let engine = ValidationEngine::new(Config::default());
        let commits = vec![commit("a1", "Fix typo", None)];
        let report = engine.validate("12.0", None, &commits).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings()[0].kind, FindingKind::MissingTag);
    }

    #[test]
    fn test_release_commit_without_diffs_is_fatal() {
        let engine = ValidationEngine::new(Config::default());
        let commits = vec![commit("a1", ":sparkles: Add feature", None)];
        let err = engine.validate("12.0", None, &commits).unwrap_err();
        assert!(matches!(err, TagCheckError::Input(_)));
    }

    #[test]
    fn test_malformed_target_version() {
        let engine = ValidationEngine::new(Config::default());
        let commits = vec![commit("a1", ":memo: Notes", None)];
        let report = engine
            .validate("12.0-feature", Some("not.a.version.at"), &commits)
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings()[0].kind, FindingKind::MalformedVersion);
    }

    #[test]
    fn test_changelog_bump_checked_per_commit() {
        let engine = ValidationEngine::new(Config::default());
        let changelog = file(
            "addon/doc/changelog.rst",
            Some("@@ -1 +1 @@\n-`1.2.3`\n+`1.2.5`\n"),
        );
        let commits = vec![commit(
            "a1",
            ":ambulance: Fix bug",
            Some(vec![changelog]),
        )];
        let report = engine.validate("12.0", None, &commits).unwrap();
        let kinds: Vec<FindingKind> = report.iter().map(|f| f.kind).collect();
        assert!(kinds.contains(&FindingKind::VersionMismatch));
    }

    #[test]
    fn test_aggregate_runs_over_manifest_files() {
        let engine = ValidationEngine::new(Config::default());
        let commits = vec![
            commit(
                "a1",
                ":zap: Improve flow",
                Some(vec![
                    file(
                        "addon/doc/changelog.rst",
                        Some("@@ -1 +1 @@\n-`1.2.0`\n+`1.3.0`\n"),
                    ),
                    file("addon/doc/index.rst", None),
                    file(
                        "addon/__manifest__.py",
                        Some("@@ -1 +1 @@\n-'version': '12.0.1.2.0',\n+'version': '12.0.1.2.1',\n"),
                    ),
                ]),
            ),
        ];
        let report = engine.validate("12.0", None, &commits).unwrap();
        // the changelog pair is fine, the manifest bumped patch instead of minor
        assert_eq!(report.len(), 1);
        let finding = &report.findings()[0];
        assert_eq!(finding.kind, FindingKind::VersionMismatch);
        assert!(finding.detail.contains("__manifest__.py"));
        assert!(finding.detail.contains("12.0.1.3.0"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let engine = ValidationEngine::new(Config::default());
        let commits = vec![
            commit("a1", "Fix typo", None),
            commit("b2", ":memo::fire: Two dev tags", None),
        ];
        let first = engine.validate("12.0-wip", None, &commits).unwrap();
        let second = engine.validate("12.0-wip", None, &commits).unwrap();
        assert_eq!(first, second);
    }
}
