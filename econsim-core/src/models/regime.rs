use serde::{Deserialize, Serialize};

/// One of the two Indian income-tax rule sets a taxpayer chooses between
/// annually: New (lower rates, fewer deductions) or Old (higher rates, many
/// deductions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    New,
    Old,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Old => "old",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "old" => Some(Self::Old),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn as_str_round_trips_through_parse() {
        assert_eq!(Regime::parse(Regime::New.as_str()), Some(Regime::New));
        assert_eq!(Regime::parse(Regime::Old.as_str()), Some(Regime::Old));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Regime::parse("hybrid"), None);
    }
}
