use crate::config::VocabularyConfig;
use crate::domain::{BranchKind, Tag, TagCategory};
use crate::engine::report::FindingKind;

/// A branch-policy violation, not yet bound to a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyViolation {
    pub kind: FindingKind,
    pub detail: String,
}

fn violation(kind: FindingKind, detail: &str) -> PolicyViolation {
    PolicyViolation {
        kind,
        detail: detail.to_string(),
    }
}

/// Enforce which tag categories are legal for a commit given the branch kind.
///
/// Topic branches take exactly one development tag and no release tags;
/// mainline branches the mirror image. Rules evaluate independently, so one
/// violation does not hide another.
pub fn evaluate(tags: &[Tag], branch: BranchKind, vocab: &VocabularyConfig) -> Vec<PolicyViolation> {
    let dev_count = tags
        .iter()
        .filter(|t| t.category == TagCategory::DevelopmentOnly)
        .count();
    let release_count = tags
        .iter()
        .filter(|t| t.category == TagCategory::Release)
        .count();
    let digit_count = tags
        .iter()
        .filter(|t| t.category == TagCategory::VersionDigit)
        .count();

    let mut violations = Vec::new();

    match branch {
        BranchKind::Topic => {
            if release_count > 0 {
                violations.push(violation(
                    FindingKind::ReleaseTagOnTopicBranch,
                    "You cannot use release tags in development branch!",
                ));
            }
            if dev_count == 0 {
                violations.push(violation(
                    FindingKind::MissingDevTag,
                    "There should be a Development tag in the dev branches!",
                ));
            }
            if dev_count > 1 {
                violations.push(violation(
                    FindingKind::MultipleDevTags,
                    "You must use only one Development tag!",
                ));
            }
        }
        BranchKind::Mainline => {
            if dev_count > 0 {
                violations.push(violation(
                    FindingKind::DevTagOnMainlineBranch,
                    "You cannot use Development tag in stable branch!",
                ));
            }
            if release_count == 0 {
                violations.push(violation(
                    FindingKind::MissingReleaseTag,
                    "There should be a Release tag in the stable branches!",
                ));
            }
            if release_count > 1 {
                violations.push(violation(
                    FindingKind::MultipleReleaseTags,
                    "You must use only one Release tag (along with version tags when they are required)!",
                ));
            }
        }
    }

    let needs_digits = tags.iter().any(|t| t.requires_version_digits(vocab));
    if needs_digits && digit_count == 0 {
        violations.push(violation(
            FindingKind::MissingVersionDigits,
            "Must be Version tags!",
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<Tag> {
        let vocab = VocabularyConfig::default();
        names.iter().map(|n| Tag::classify(n, &vocab)).collect()
    }

    fn kinds(violations: &[PolicyViolation]) -> Vec<FindingKind> {
        violations.iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_topic_branch_single_dev_tag_passes() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":memo:"]), BranchKind::Topic, &vocab);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_topic_branch_missing_dev_tag() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":one:"]), BranchKind::Topic, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::MissingDevTag]);
    }

    #[test]
    fn test_topic_branch_multiple_dev_tags() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":memo:", ":fire:"]), BranchKind::Topic, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::MultipleDevTags]);
    }

    #[test]
    fn test_topic_branch_rejects_release_tag() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":memo:", ":sparkles:"]), BranchKind::Topic, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::ReleaseTagOnTopicBranch]);
    }

    #[test]
    fn test_topic_branch_independent_rules_both_fire() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":sparkles:"]), BranchKind::Topic, &vocab);
        assert_eq!(
            kinds(&violations),
            vec![
                FindingKind::ReleaseTagOnTopicBranch,
                FindingKind::MissingDevTag
            ]
        );
    }

    #[test]
    fn test_mainline_single_release_tag_passes() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":sparkles:"]), BranchKind::Mainline, &vocab);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_mainline_missing_release_tag() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":one:"]), BranchKind::Mainline, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::MissingReleaseTag]);
    }

    #[test]
    fn test_mainline_multiple_release_tags() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":sparkles:", ":zap:"]), BranchKind::Mainline, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::MultipleReleaseTags]);
    }

    #[test]
    fn test_mainline_rejects_dev_tag() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":memo:", ":zap:"]), BranchKind::Mainline, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::DevTagOnMainlineBranch]);
    }

    #[test]
    fn test_requires_version_digits() {
        let vocab = VocabularyConfig::default();
        let violations = evaluate(&tags(&[":tada:"]), BranchKind::Mainline, &vocab);
        assert_eq!(kinds(&violations), vec![FindingKind::MissingVersionDigits]);

        let violations = evaluate(&tags(&[":tada:", ":one:", ":zero:"]), BranchKind::Mainline, &vocab);
        assert!(violations.is_empty());
    }
}
