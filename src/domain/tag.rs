use crate::config::VocabularyConfig;

/// Category of a commit-message tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// In-progress change, never triggers a release
    DevelopmentOnly,
    /// Change that must be reflected in version/documentation files
    Release,
    /// Spells one decimal digit of an explicit version number
    VersionDigit,
    /// Not in the known vocabulary
    Invalid,
}

/// Which version field a release tag governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseClass {
    Major,
    Minor,
    Patch,
}

/// A `:word:` marker token from a commit message prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub category: TagCategory,
}

impl Tag {
    /// Classify a raw token against the configured vocabulary.
    pub fn classify(token: &str, vocab: &VocabularyConfig) -> Self {
        let category = if vocab.development.iter().any(|t| t == token) {
            TagCategory::DevelopmentOnly
        } else if vocab.release.iter().any(|t| t == token) {
            TagCategory::Release
        } else if vocab.version_digits.iter().any(|t| t == token) {
            TagCategory::VersionDigit
        } else {
            TagCategory::Invalid
        };

        Tag {
            name: token.to_string(),
            category,
        }
    }

    /// Release class of this tag, if it is one of the three version-class tags.
    pub fn release_class(&self, vocab: &VocabularyConfig) -> Option<ReleaseClass> {
        if self.category != TagCategory::Release {
            return None;
        }
        if self.name == vocab.major_tag {
            Some(ReleaseClass::Major)
        } else if self.name == vocab.minor_tag {
            Some(ReleaseClass::Minor)
        } else if self.name == vocab.patch_tag {
            Some(ReleaseClass::Patch)
        } else {
            None
        }
    }

    /// Whether this tag demands spelled-out version digit tags alongside it.
    pub fn requires_version_digits(&self, vocab: &VocabularyConfig) -> bool {
        vocab.requires_version_digits.iter().any(|t| t == &self.name)
    }

    /// Decimal digit value for VersionDigit tags (`:zero:` -> 0, ... `:nine:` -> 9).
    pub fn digit_value(&self, vocab: &VocabularyConfig) -> Option<u8> {
        vocab
            .version_digits
            .iter()
            .position(|t| t == &self.name)
            .map(|i| i as u8)
    }
}
