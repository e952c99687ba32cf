use crate::config::VocabularyConfig;
use crate::domain::{Tag, TagCategory};
use crate::engine::report::FindingKind;
use regex::Regex;

/// Result of classifying a commit message prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Every token in the prefix belongs to the known vocabulary.
    Tags(Vec<Tag>),
    /// No validation beyond this point is possible for the commit.
    Failed { kind: FindingKind, detail: String },
}

/// Extracts and classifies the leading tag run of a commit message.
///
/// The run must start at the very first character of the message and ends at
/// the first whitespace; tag-shaped tokens anywhere else are ignored.
pub fn classify(message: &str, vocab: &VocabularyConfig) -> Classification {
    let missing_tag = || Classification::Failed {
        kind: FindingKind::MissingTag,
        detail: "There are no tags in the commit!".to_string(),
    };

    let run_re = Regex::new(r"^(:\S+:)").expect("static tag-run pattern");
    let run = match run_re.captures(message) {
        Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(""),
        None => return missing_tag(),
    };

    let token_re = Regex::new(r":\w+:").expect("static tag pattern");
    let tokens: Vec<&str> = token_re.find_iter(run).map(|m| m.as_str()).collect();

    if tokens.is_empty() {
        return missing_tag();
    }

    let tags: Vec<Tag> = tokens
        .iter()
        .map(|token| Tag::classify(token, vocab))
        .collect();

    // Fails closed: a single unknown token invalidates the whole prefix.
    let unknown: Vec<&str> = tags
        .iter()
        .filter(|t| t.category == TagCategory::Invalid)
        .map(|t| t.name.as_str())
        .collect();
    if !unknown.is_empty() {
        return Classification::Failed {
            kind: FindingKind::UnknownTag,
            detail: format!(
                "There should not be such tags in the commit! Unknown: {}",
                unknown.join(", ")
            ),
        };
    }

    Classification::Tags(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_release_tag() {
        let vocab = VocabularyConfig::default();
        match classify(":sparkles: Add feature", &vocab) {
            Classification::Tags(tags) => {
                assert_eq!(tags.len(), 1);
                assert_eq!(tags[0].name, ":sparkles:");
                assert_eq!(tags[0].category, TagCategory::Release);
            }
            other => panic!("expected tags, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_tag_run_in_order() {
        let vocab = VocabularyConfig::default();
        match classify(":tada::one::two: Release 1.2", &vocab) {
            Classification::Tags(tags) => {
                let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
                assert_eq!(names, vec![":tada:", ":one:", ":two:"]);
            }
            other => panic!("expected tags, got {:?}", other),
        }
    }

    #[test]
    fn test_no_tag_is_missing_tag() {
        let vocab = VocabularyConfig::default();
        match classify("Fix typo", &vocab) {
            Classification::Failed { kind, .. } => assert_eq!(kind, FindingKind::MissingTag),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_fails_closed() {
        let vocab = VocabularyConfig::default();
        match classify(":sparkles::rocket: Add feature", &vocab) {
            Classification::Failed { kind, detail } => {
                assert_eq!(kind, FindingKind::UnknownTag);
                assert!(detail.contains(":rocket:"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_tags_after_whitespace_are_ignored() {
        let vocab = VocabularyConfig::default();
        match classify(":memo: Mention :sparkles: in docs", &vocab) {
            Classification::Tags(tags) => assert_eq!(tags.len(), 1),
            other => panic!("expected tags, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_run_must_start_the_message() {
        let vocab = VocabularyConfig::default();
        for message in [
            "WIP:memo: sketch the model",
            " :memo: leading space",
            "[12.0]:zap: backport",
        ] {
            match classify(message, &vocab) {
                Classification::Failed { kind, .. } => {
                    assert_eq!(kind, FindingKind::MissingTag, "message: {}", message)
                }
                other => panic!("expected MissingTag for {:?}, got {:?}", message, other),
            }
        }
    }

    #[test]
    fn test_run_without_word_tokens_is_missing_tag() {
        let vocab = VocabularyConfig::default();
        assert!(matches!(
            classify(":--: decorative", &vocab),
            Classification::Failed {
                kind: FindingKind::MissingTag,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_message_is_missing_tag() {
        let vocab = VocabularyConfig::default();
        assert!(matches!(
            classify("", &vocab),
            Classification::Failed {
                kind: FindingKind::MissingTag,
                ..
            }
        ));
    }
}
