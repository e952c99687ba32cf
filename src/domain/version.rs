use crate::domain::tag::ReleaseClass;
use crate::error::{Result, TagCheckError};
use regex::Regex;
use std::fmt;

/// Dotted integer version, either 3 fields (`MAJOR.MINOR.PATCH`, changelog
/// style) or 5 fields (manifest style, where the first two fields are a fixed
/// epoch/platform prefix and the last three are major/minor/patch).
///
/// Which absolute offset holds major/minor/patch is derived from the tuple
/// length; that mapping is documented policy carried over from the checked
/// repositories' version scheme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTuple {
    fields: Vec<u64>,
}

impl VersionTuple {
    /// Build a tuple from raw fields. Only 3- and 5-field tuples are valid.
    pub fn new(fields: Vec<u64>) -> Result<Self> {
        if fields.len() != 3 && fields.len() != 5 {
            return Err(TagCheckError::version(format!(
                "expected 3 or 5 version fields, got {}",
                fields.len()
            )));
        }
        Ok(VersionTuple { fields })
    }

    /// Parse a version anchored to the end of `s`.
    ///
    /// Tries the 5-field form first so that `12.0.1.2.3` is not truncated to
    /// its 3-field suffix.
    pub fn parse(s: &str) -> Result<Self> {
        for field_count in [5usize, 3] {
            // the run must not be the tail of a longer dotted run
            let pattern = format!(r"(?:^|[^\d.])(\d+(?:\.\d+){{{}}})\s*$", field_count - 1);
            let re = Regex::new(&pattern).expect("static version pattern");
            if let Some(m) = re.captures(s.trim_end()) {
                let fields = m[1]
                    .split('.')
                    .map(|part| {
                        part.parse::<u64>().map_err(|_| {
                            TagCheckError::version(format!("invalid version field: {}", part))
                        })
                    })
                    .collect::<Result<Vec<u64>>>()?;
                return Ok(VersionTuple { fields });
            }
        }
        Err(TagCheckError::version(format!(
            "'{}' does not end in a 3- or 5-field dotted version",
            s
        )))
    }

    /// Number of fields (3 or 5).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn major_index(&self) -> usize {
        self.fields.len() - 3
    }

    pub fn major(&self) -> u64 {
        self.fields[self.major_index()]
    }

    pub fn minor(&self) -> u64 {
        self.fields[self.major_index() + 1]
    }

    pub fn patch(&self) -> u64 {
        self.fields[self.major_index() + 2]
    }

    /// The tuple this one must become after a bump of the given class:
    /// the governed field goes up by one, every lower-significance field
    /// resets to zero, higher fields (including the 5-field epoch prefix)
    /// stay unchanged.
    pub fn bump(&self, class: ReleaseClass) -> Self {
        let mut fields = self.fields.clone();
        let base = self.major_index();
        let governed = match class {
            ReleaseClass::Major => base,
            ReleaseClass::Minor => base + 1,
            ReleaseClass::Patch => base + 2,
        };
        fields[governed] += 1;
        for field in fields.iter_mut().skip(governed + 1) {
            *field = 0;
        }
        VersionTuple { fields }
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.fields.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}
