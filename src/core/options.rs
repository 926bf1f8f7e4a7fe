//! Formatting options for LaTeX row generation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling table-body rendering
///
/// Exactly one knob is recognized: the placeholder text substituted for
/// missing cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Display text used whenever a cell is the missing-value marker,
    /// emitted as `\text{<nonestring>}`
    pub nonestring: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            nonestring: "None".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with a custom missing-value placeholder
    pub fn with_nonestring(nonestring: impl Into<String>) -> Self {
        Self {
            nonestring: nonestring.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nonestring() {
        assert_eq!(FormatOptions::default().nonestring, "None");
        assert_eq!(FormatOptions::new(), FormatOptions::default());
    }

    #[test]
    fn test_with_nonestring() {
        let opts = FormatOptions::with_nonestring("NA");
        assert_eq!(opts.nonestring, "NA");
    }
}
