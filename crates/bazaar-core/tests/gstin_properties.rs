//! Property tests for GSTIN syntax checks.

use proptest::prelude::*;

use bazaar_core::gstin::{check_gstin, validate_gstin};
use bazaar_core::ErrorKind;

const GSTIN_REGEX: &str = "[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]";

fn replace_at(s: &str, index: usize, c: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, orig)| if i == index { c } else { orig })
        .collect()
}

proptest! {
    #[test]
    fn prop_well_formed_gstin_accepted(gstin in GSTIN_REGEX) {
        prop_assert!(validate_gstin(&gstin));
        let parsed = check_gstin(&format!("  {}\t", gstin)).unwrap();
        prop_assert_eq!(parsed.map(|g| g.as_str().to_string()), Some(gstin));
    }

    #[test]
    fn prop_lowercase_or_symbol_anywhere_rejected(
        gstin in GSTIN_REGEX,
        index in 0usize..15,
        bad in prop::sample::select(vec!['a', 'z', '#', '-', ' ']),
    ) {
        let broken = replace_at(&gstin, index, bad);
        prop_assert!(!validate_gstin(&broken));
    }

    #[test]
    fn prop_fourteenth_char_must_be_z(gstin in GSTIN_REGEX, c in "[A-Y0-9]") {
        let broken = replace_at(&gstin, 13, c.chars().next().unwrap());
        prop_assert!(!validate_gstin(&broken));
    }

    #[test]
    fn prop_entity_code_never_zero(gstin in GSTIN_REGEX) {
        prop_assert!(!validate_gstin(&replace_at(&gstin, 12, '0')));
    }

    #[test]
    fn prop_wrong_length_is_length_error(gstin in GSTIN_REGEX, extra in "[0-9A-Z]{1,5}") {
        let candidate = format!("{}{}", gstin, extra);
        prop_assert!(!validate_gstin(&candidate));
        prop_assert!(!validate_gstin(&gstin[..14]));

        let err = check_gstin(&gstin[..14]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);
        prop_assert!(err.to_string().contains("exactly 15"));
    }
}
