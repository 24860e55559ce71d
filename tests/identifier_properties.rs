//! Property tests for the identifier grammars and their lenient parsing.
//!
//! External data sources and consumers depend on the exact canonical
//! formatting of these identifiers, so the round-trip and recovery
//! properties are exercised across the whole value space rather than with
//! hand-picked samples.

use kbobce::codes::{Descriptions, Status};
use kbobce::identifiers::{EnterpriseNumber, EstablishmentNumber, SocialSecurityNumber};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonical_enterprise_numbers_round_trip(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
    ) {
        let canonical = format!("0{:03}.{:03}.{:03}", a, b, c);
        prop_assert!(EnterpriseNumber::is_valid(&canonical));
        let number = EnterpriseNumber::new(canonical.clone()).unwrap();
        prop_assert_eq!(number.as_str(), canonical.as_str());
    }

    #[test]
    fn parse_is_identity_on_canonical_input(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
    ) {
        let canonical = format!("0{:03}.{:03}.{:03}", a, b, c);
        let parsed = EnterpriseNumber::parse(&canonical).unwrap();
        let direct = EnterpriseNumber::new(canonical).unwrap();
        prop_assert_eq!(parsed, direct);
    }

    #[test]
    fn parse_recovers_separated_forms(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        prefix in prop::sample::select(vec!["", "BE", "BE ", "be"]),
        separator in prop::sample::select(vec!["", " ", ".", "-", "/"]),
    ) {
        let canonical = format!("0{:03}.{:03}.{:03}", a, b, c);
        let mangled = format!(
            "{}0{:03}{}{:03}{}{:03}",
            prefix, a, separator, b, separator, c
        );
        let expected = EnterpriseNumber::new(canonical).unwrap();
        prop_assert_eq!(EnterpriseNumber::parse(&mangled).unwrap(), expected);
    }

    #[test]
    fn non_canonical_input_fails_strict_construction(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
    ) {
        // same digits, missing dots: strict path must reject what the
        // lenient path recovers
        let undotted = format!("0{:03}{:03}{:03}", a, b, c);
        prop_assert!(!EnterpriseNumber::is_valid(&undotted));
        prop_assert!(EnterpriseNumber::new(undotted.clone()).is_err());
        prop_assert!(EnterpriseNumber::parse(&undotted).is_some());
    }

    #[test]
    fn eleventh_digit_rejects_lenient_parse(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        extra in 0u32..10,
    ) {
        let eleven = format!("0{:03}{:03}{:03}{}", a, b, c, extra);
        prop_assert!(EnterpriseNumber::parse(&eleven).is_none());
    }

    #[test]
    fn digitless_input_never_parses(s in "[^0-9]*") {
        prop_assert!(EnterpriseNumber::parse(&s).is_none());
        prop_assert!(EstablishmentNumber::parse(&s).is_none());
        prop_assert!(SocialSecurityNumber::parse(&s).is_none());
    }

    #[test]
    fn numeric_round_trip(n in 0u64..=999_999_999) {
        let number = EnterpriseNumber::from_u64(n).unwrap();
        prop_assert_eq!(number.as_u64(), n);
    }

    #[test]
    fn values_above_nine_digits_have_no_enterprise_number(
        n in 1_000_000_000u64..,
    ) {
        prop_assert!(EnterpriseNumber::from_u64(n).is_none());
    }

    #[test]
    fn canonical_establishment_numbers_round_trip(
        d in 0u32..10,
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
    ) {
        let canonical = format!("{}.{:03}.{:03}.{:03}", d, a, b, c);
        prop_assert!(EstablishmentNumber::is_valid(&canonical));
        let number = EstablishmentNumber::new(canonical.clone()).unwrap();
        prop_assert_eq!(number.as_str(), canonical.as_str());

        let undotted = format!("{}{:03}{:03}{:03}", d, a, b, c);
        let parsed_undotted = EstablishmentNumber::parse(&undotted).unwrap();
        prop_assert_eq!(
            parsed_undotted.as_str(),
            canonical.as_str()
        );
    }

    #[test]
    fn social_security_parse_accepts_only_nine_or_twelve_digits(
        digits in prop::collection::vec(0u8..10, 0..16),
    ) {
        let input: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let parsed = SocialSecurityNumber::parse(&input);
        if digits.len() == 9 || digits.len() == 12 {
            let parsed_ok = parsed.unwrap();
            prop_assert_eq!(parsed_ok.as_str(), input.as_str());
        } else {
            prop_assert!(parsed.is_none());
        }
    }

    #[test]
    fn status_codes_valid_iff_two_characters(code in "[A-Z]{0,5}") {
        let result = Status::new(code.clone(), Descriptions::default());
        prop_assert_eq!(result.is_ok(), code.chars().count() == 2);
    }
}
