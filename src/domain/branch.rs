/// Classification of the branch a pull request targets.
///
/// A branch name containing a hyphen is treated as a topic (development)
/// branch; anything else is a mainline/stable branch. This is a heuristic
/// over the name, not a parsed ref type, and is kept as documented policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Topic,
    Mainline,
}

impl BranchKind {
    /// Classify a branch by its name.
    pub fn classify(name: &str) -> Self {
        if name.contains('-') {
            BranchKind::Topic
        } else {
            BranchKind::Mainline
        }
    }

    /// Check if this is a mainline/stable branch
    pub fn is_mainline(&self) -> bool {
        matches!(self, BranchKind::Mainline)
    }
}
