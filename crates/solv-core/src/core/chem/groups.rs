use std::fmt;

/// A functional-group label drawn from the fixed external taxonomy.
///
/// The set is closed: matcher implementations may only emit these labels, and
/// label strings outside the set map to [`GroupLabel::Unrecognized`] so the
/// ignored-label path is a visible case rather than an implicit fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    Alcohol,
    Aldehyde,
    Amine,
    CarboxylicAcid,
    Halogen,
    Nitro,
    SulfonylChloride,
    TerminalAlkyne,
    /// A label outside the recognized taxonomy.
    Unrecognized,
}

impl GroupLabel {
    /// Converts a taxonomy label string into a `GroupLabel`.
    ///
    /// This conversion never fails; unknown strings become `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Alcohol" => GroupLabel::Alcohol,
            "Aldehyde" => GroupLabel::Aldehyde,
            "Amine" => GroupLabel::Amine,
            "CarboxylicAcid" => GroupLabel::CarboxylicAcid,
            "Halogen" => GroupLabel::Halogen,
            "Nitro" => GroupLabel::Nitro,
            "SulfonylChloride" => GroupLabel::SulfonylChloride,
            "TerminalAlkyne" => GroupLabel::TerminalAlkyne,
            _ => GroupLabel::Unrecognized,
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupLabel::Alcohol => "Alcohol",
            GroupLabel::Aldehyde => "Aldehyde",
            GroupLabel::Amine => "Amine",
            GroupLabel::CarboxylicAcid => "CarboxylicAcid",
            GroupLabel::Halogen => "Halogen",
            GroupLabel::Nitro => "Nitro",
            GroupLabel::SulfonylChloride => "SulfonylChloride",
            GroupLabel::TerminalAlkyne => "TerminalAlkyne",
            GroupLabel::Unrecognized => "Unrecognized",
        };
        write!(f, "{}", name)
    }
}

/// One functional-group occurrence reported by a matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch {
    pub label: GroupLabel,
    /// Indices of the atoms anchoring the match, for diagnostics.
    pub atoms: Vec<usize>,
}

impl GroupMatch {
    pub fn new(label: GroupLabel, atoms: Vec<usize>) -> Self {
        Self { label, atoms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip() {
        for label in [
            GroupLabel::Alcohol,
            GroupLabel::Aldehyde,
            GroupLabel::Amine,
            GroupLabel::CarboxylicAcid,
            GroupLabel::Halogen,
            GroupLabel::Nitro,
            GroupLabel::SulfonylChloride,
            GroupLabel::TerminalAlkyne,
        ] {
            assert_eq!(GroupLabel::from_label(&label.to_string()), label);
        }
    }

    #[test]
    fn unknown_labels_become_unrecognized() {
        assert_eq!(
            GroupLabel::from_label("AcidChloride"),
            GroupLabel::Unrecognized
        );
        assert_eq!(GroupLabel::from_label(""), GroupLabel::Unrecognized);
        assert_eq!(GroupLabel::from_label("alcohol"), GroupLabel::Unrecognized);
    }
}
