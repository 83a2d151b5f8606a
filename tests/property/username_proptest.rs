//! Property-based tests for username validation
//!
//! Uses proptest to generate random inputs and verify properties

use authbox::backend::auth::service::is_valid_username;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_well_formed_usernames_accepted(name in "[A-Za-z][A-Za-z0-9_]{2,29}") {
        prop_assert!(is_valid_username(&name));
    }

    #[test]
    fn test_leading_non_letter_rejected(name in "[0-9_][A-Za-z0-9_]{2,29}") {
        prop_assert!(!is_valid_username(&name));
    }

    #[test]
    fn test_too_short_rejected(name in "[A-Za-z][A-Za-z0-9_]{0,1}") {
        prop_assert!(!is_valid_username(&name));
    }

    #[test]
    fn test_too_long_rejected(name in "[A-Za-z][A-Za-z0-9_]{30,40}") {
        prop_assert!(!is_valid_username(&name));
    }

    #[test]
    fn test_forbidden_character_rejected(
        prefix in "[A-Za-z][A-Za-z0-9_]{1,10}",
        bad in "[- .@!/é]",
        suffix in "[A-Za-z0-9_]{0,10}",
    ) {
        let name = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(!is_valid_username(&name));
    }
}
