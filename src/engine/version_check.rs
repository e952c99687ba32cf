use crate::domain::{ReleaseClass, VersionDelta, VersionTuple};
use crate::engine::report::{Finding, FindingKind};

/// Compare an observed before/after version pair against the bump a release
/// tag implies. Passes exactly when `after` is `before` with the governed
/// field incremented and every lower field reset; the 5-field epoch prefix
/// must stay unchanged. Returns the failure detail naming the expected tuple.
pub fn validate_bump(
    class: ReleaseClass,
    before: &VersionTuple,
    after: &VersionTuple,
    filename: &str,
    tag_name: &str,
) -> Option<String> {
    let expected = before.bump(class);
    if *after == expected {
        return None;
    }
    Some(format!(
        "If you use tag {} the version in the \"{}\" file must be updated to {}! \
         Old version is {} and new version is {}.",
        tag_name, filename, expected, before, after
    ))
}

/// One release-class commit's contribution to the manifest version history.
#[derive(Debug, Clone)]
pub struct ManifestContribution {
    pub sha: String,
    pub message: String,
    pub tag_name: String,
    pub class: ReleaseClass,
    pub delta: VersionDelta,
}

/// Reconcile the manifest version across the whole commit set.
///
/// A manifest bump may need to reflect the aggregate effect of several
/// commits: the expected final version is the fold of every contributing
/// commit's release class over the oldest observed version. A discrepancy is
/// attributed to all contributing commits, not to a single one.
pub fn validate_aggregate(
    contributions: &[ManifestContribution],
    manifest_name: &str,
) -> Option<Finding> {
    let changed: Vec<(&ManifestContribution, &VersionTuple, &VersionTuple)> = contributions
        .iter()
        .filter_map(|c| match &c.delta {
            VersionDelta::Changed { before, after } => Some((c, before, after)),
            VersionDelta::TouchedOnly => None,
        })
        .collect();

    let (_, oldest, _) = *changed.first()?;
    let (_, _, newest) = *changed.last()?;

    let mut expected = oldest.clone();
    for (contribution, _, _) in &changed {
        expected = expected.bump(contribution.class);
    }

    if *newest == expected {
        return None;
    }

    let shas: Vec<String> = changed.iter().map(|(c, _, _)| c.sha.clone()).collect();
    let tag_names: Vec<&str> = changed.iter().map(|(c, _, _)| c.tag_name.as_str()).collect();
    let messages: Vec<&str> = changed
        .iter()
        .filter_map(|(c, _, _)| c.message.lines().next())
        .collect();

    Some(Finding {
        commits: shas,
        message: messages.join(", "),
        kind: FindingKind::VersionMismatch,
        detail: format!(
            "If you use tag(s) {} the version in the \"{}\" file must be updated to {}! \
             Old version is {} and new version is {}.",
            tag_names.join(", "),
            manifest_name,
            expected,
            oldest,
            newest
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionTuple {
        VersionTuple::parse(s).unwrap()
    }

    #[test]
    fn test_validate_bump_passes_on_exact_increment() {
        for (class, before, after, tag) in [
            (ReleaseClass::Major, "1.2.0", "2.0.0", ":sparkles:"),
            (ReleaseClass::Minor, "1.2.3", "1.3.0", ":zap:"),
            (ReleaseClass::Patch, "1.2.3", "1.2.4", ":ambulance:"),
        ] {
            assert_eq!(
                validate_bump(class, &v(before), &v(after), "doc/changelog.rst", tag),
                None
            );
        }
    }

    #[test]
    fn test_validate_bump_skipped_patch_names_expected() {
        let detail = validate_bump(
            ReleaseClass::Patch,
            &v("1.2.3"),
            &v("1.2.5"),
            "doc/changelog.rst",
            ":ambulance:",
        )
        .unwrap();
        assert!(detail.contains("1.2.4"), "detail was: {}", detail);
    }

    #[test]
    fn test_validate_bump_rejects_unreset_lower_fields() {
        assert!(validate_bump(
            ReleaseClass::Major,
            &v("1.2.3"),
            &v("2.2.3"),
            "f",
            ":sparkles:"
        )
        .is_some());
        assert!(validate_bump(
            ReleaseClass::Minor,
            &v("1.2.3"),
            &v("1.3.3"),
            "f",
            ":zap:"
        )
        .is_some());
    }

    #[test]
    fn test_validate_bump_five_field_manifest() {
        assert_eq!(
            validate_bump(
                ReleaseClass::Minor,
                &v("12.0.1.2.3"),
                &v("12.0.1.3.0"),
                "addon/__manifest__.py",
                ":zap:"
            ),
            None
        );
        // Changed epoch prefix is a mismatch even with correct minor arithmetic
        assert!(validate_bump(
            ReleaseClass::Minor,
            &v("12.0.1.2.3"),
            &v("13.0.1.3.0"),
            "addon/__manifest__.py",
            ":zap:"
        )
        .is_some());
    }

    fn contribution(sha: &str, class: ReleaseClass, before: &str, after: &str) -> ManifestContribution {
        ManifestContribution {
            sha: sha.to_string(),
            message: format!("commit {}", sha),
            tag_name: match class {
                ReleaseClass::Major => ":sparkles:",
                ReleaseClass::Minor => ":zap:",
                ReleaseClass::Patch => ":ambulance:",
            }
            .to_string(),
            class,
            delta: VersionDelta::Changed {
                before: v(before),
                after: v(after),
            },
        }
    }

    #[test]
    fn test_aggregate_two_commits_pass() {
        // minor then patch over 12.0.1.2.3: expect 12.0.1.3.1 at the end
        let contributions = vec![
            contribution("a1", ReleaseClass::Minor, "12.0.1.2.3", "12.0.1.3.0"),
            contribution("b2", ReleaseClass::Patch, "12.0.1.3.0", "12.0.1.3.1"),
        ];
        assert_eq!(
            validate_aggregate(&contributions, "addon/__manifest__.py"),
            None
        );
    }

    #[test]
    fn test_aggregate_mismatch_names_all_commits() {
        let contributions = vec![
            contribution("a1", ReleaseClass::Minor, "12.0.1.2.3", "12.0.1.3.0"),
            contribution("b2", ReleaseClass::Patch, "12.0.1.3.0", "12.0.1.3.0"),
        ];
        let finding = validate_aggregate(&contributions, "addon/__manifest__.py").unwrap();
        assert_eq!(finding.kind, FindingKind::VersionMismatch);
        assert_eq!(finding.commits, vec!["a1".to_string(), "b2".to_string()]);
        assert!(finding.detail.contains("12.0.1.3.1"));
    }

    #[test]
    fn test_aggregate_ignores_touched_only() {
        let contributions = vec![ManifestContribution {
            sha: "c3".to_string(),
            message: "no versions here".to_string(),
            tag_name: ":zap:".to_string(),
            class: ReleaseClass::Minor,
            delta: VersionDelta::TouchedOnly,
        }];
        assert_eq!(validate_aggregate(&contributions, "m"), None);
    }
}
