use serde::Serialize;
use std::fmt;

/// Card grading codes, best to worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Gem,
    #[default]
    Nm,
    Ex,
    Lp,
    Mp,
    Hp,
    Dmg,
}

impl Condition {
    pub fn code(&self) -> &'static str {
        match self {
            Condition::Gem => "GEM",
            Condition::Nm => "NM",
            Condition::Ex => "EX",
            Condition::Lp => "LP",
            Condition::Mp => "MP",
            Condition::Hp => "HP",
            Condition::Dmg => "DMG",
        }
    }

    /// Exact code lookup. Callers wanting the lenient resolver use `parsers::to_condition`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GEM" => Some(Condition::Gem),
            "NM" => Some(Condition::Nm),
            "EX" => Some(Condition::Ex),
            "LP" => Some(Condition::Lp),
            "MP" => Some(Condition::Mp),
            "HP" => Some(Condition::Hp),
            "DMG" => Some(Condition::Dmg),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: String,
    pub condition: Condition,
    /// Display text as typed in the sheet, e.g. "$40".
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.condition, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_round_trip_through_from_code() {
        for condition in [
            Condition::Gem,
            Condition::Nm,
            Condition::Ex,
            Condition::Lp,
            Condition::Mp,
            Condition::Hp,
            Condition::Dmg,
        ] {
            assert_eq!(Condition::from_code(condition.code()), Some(condition));
        }
        assert_eq!(Condition::from_code("nm"), None);
    }

    #[test]
    fn default_grade_is_near_mint() {
        assert_eq!(Condition::default(), Condition::Nm);
    }

    #[test]
    fn listing_serializes_with_grade_code_and_without_missing_image() {
        let listing = Listing {
            name: "Lugia ex".to_string(),
            condition: Condition::Dmg,
            price: "$40".to_string(),
            img: None,
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Lugia ex", "condition": "DMG", "price": "$40" })
        );
    }
}
