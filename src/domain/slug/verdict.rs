use std::fmt;

/// Why a slug value failed validation. Stages short-circuit in this
/// order: emptiness, format, uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugViolation {
    Empty,
    Format,
    Duplicate,
}

impl SlugViolation {
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Empty => "Slug cannot be empty. Please enter a valid slug.",
            Self::Format => {
                "Slug must contain only lowercase letters, numbers, hyphens, and forward slashes. \
                 It can start and end with a forward slash for paths."
            }
            Self::Duplicate => "This slug is already in use. Please enter a unique slug.",
        }
    }
}

impl fmt::Display for SlugViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_message())
    }
}

/// Outcome of the validation pipeline. Recomputed on every value change,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugVerdict {
    Valid,
    Invalid(SlugViolation),
}

impl SlugVerdict {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn violation(self) -> Option<SlugViolation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }
}
