//! Closed command taxonomy
//!
//! The table is declared once, in priority order; the first row containing a
//! member name wins. Names that fall through classify as `Unclassified` so a
//! typo in a spec shows up in the counts instead of silently vanishing.

use crate::core::CommandCategory;

/// Category rows in tie-break order
const TAXONOMY: &[(CommandCategory, &[&str])] = &[
    (
        CommandCategory::Action,
        &[
            "click", "type", "select", "check", "uncheck", "clear", "focus", "blur", "trigger",
            "submit", "scrollTo",
        ],
    ),
    (CommandCategory::Assertion, &["should", "and", "contains"]),
    (CommandCategory::NetworkStub, &["intercept", "wait", "request"]),
    (CommandCategory::DataSetup, &["task", "database", "visit"]),
];

/// Custom session helpers follow a `login`-prefixed naming convention
const DATA_SETUP_PREFIX: &str = "login";

/// Classify a member name against the taxonomy
pub fn classify(member: &str) -> CommandCategory {
    for (category, names) in TAXONOMY {
        if names.contains(&member) {
            return *category;
        }
    }
    if member.starts_with(DATA_SETUP_PREFIX) {
        return CommandCategory::DataSetup;
    }
    CommandCategory::Unclassified
}

/// All concrete categories, taxonomy order, fallback last
pub fn all_categories() -> [CommandCategory; 5] {
    [
        CommandCategory::Action,
        CommandCategory::Assertion,
        CommandCategory::NetworkStub,
        CommandCategory::DataSetup,
        CommandCategory::Unclassified,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_actions() {
        for name in ["click", "type", "scrollTo", "uncheck"] {
            assert_eq!(classify(name), CommandCategory::Action, "{name}");
        }
    }

    #[test]
    fn classifies_assertions() {
        assert_eq!(classify("should"), CommandCategory::Assertion);
        assert_eq!(classify("and"), CommandCategory::Assertion);
        assert_eq!(classify("contains"), CommandCategory::Assertion);
    }

    #[test]
    fn classifies_network_and_setup() {
        assert_eq!(classify("intercept"), CommandCategory::NetworkStub);
        assert_eq!(classify("wait"), CommandCategory::NetworkStub);
        assert_eq!(classify("visit"), CommandCategory::DataSetup);
        assert_eq!(classify("task"), CommandCategory::DataSetup);
    }

    #[test]
    fn login_prefixed_helpers_are_data_setup() {
        assert_eq!(classify("login"), CommandCategory::DataSetup);
        assert_eq!(classify("loginAsAdmin"), CommandCategory::DataSetup);
        assert_eq!(classify("loginWithSession"), CommandCategory::DataSetup);
    }

    #[test]
    fn unknown_names_fall_through() {
        assert_eq!(classify("get"), CommandCategory::Unclassified);
        assert_eq!(classify("frobnicate"), CommandCategory::Unclassified);
        assert_eq!(classify(""), CommandCategory::Unclassified);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(classify("Click"), CommandCategory::Unclassified);
        assert_eq!(classify("scrollto"), CommandCategory::Unclassified);
    }
}
