use crate::config::{FilesConfig, PolicyConfig};
use crate::domain::ReleaseClass;
use crate::engine::report::FindingKind;

/// A documentation cross-check failure, not yet bound to a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct DocsViolation {
    pub kind: FindingKind,
    pub detail: String,
}

/// Verify that a version-class commit updates the companion documentation.
///
/// The changelog must be among the changed files. For major and minor classes
/// at least one of README / doc index must be changed as well; patch-class
/// commits are exempt from the README/index requirement when the policy says
/// so.
pub fn check(
    class: ReleaseClass,
    tag_name: &str,
    changed_files: &[String],
    files: &FilesConfig,
    policy: &PolicyConfig,
) -> Vec<DocsViolation> {
    let mut violations = Vec::new();

    // Changed filenames carry the addon directory prefix, so match by containment
    let touched = |name: &str| changed_files.iter().any(|f| f.contains(name));

    if !touched(&files.changelog) {
        violations.push(DocsViolation {
            kind: FindingKind::MissingChangelogUpdate,
            detail: format!(
                "If you use tag {} - file \"{}\" must be updated! Updated files: {}",
                tag_name,
                files.changelog,
                changed_files.join(", ")
            ),
        });
    }

    let patch_exempt = policy.patch_exempt_readme && class == ReleaseClass::Patch;
    if !patch_exempt && !touched(&files.readme) && !touched(&files.index) {
        violations.push(DocsViolation {
            kind: FindingKind::MissingReadmeOrIndexUpdate,
            detail: format!(
                "If you use tag {} - file \"{}\" or \"{}\" must be updated! Updated files: {}",
                tag_name,
                files.readme,
                files.index,
                changed_files.join(", ")
            ),
        });
    }

    violations
}
