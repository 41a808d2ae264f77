//! Property tests for the codec invariants.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use hex_color::{Channel, HexColor};
use hex_transfer::srgb;
use proptest::prelude::*;

fn hash_of(c: &HexColor) -> u64 {
    let mut h = DefaultHasher::new();
    c.hash(&mut h);
    h.finish()
}

fn channel() -> impl Strategy<Value = Channel> {
    prop_oneof![Just(Channel::R), Just(Channel::G), Just(Channel::B)]
}

/// Valid codes in every form, with and without prefix, mixed case.
fn valid_code() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(3usize), Just(6usize), Just(8usize)],
        any::<bool>(),
        proptest::collection::vec(0u8..16, 8),
        any::<bool>(),
    )
        .prop_map(|(len, prefix, digits, lower)| {
            let body: String = digits[..len]
                .iter()
                .map(|d| {
                    let c = char::from_digit(*d as u32, 16).unwrap_or('0');
                    if lower { c } else { c.to_ascii_uppercase() }
                })
                .collect();
            if prefix { format!("#{body}") } else { body }
        })
}

proptest! {
    #[test]
    fn is_valid_code_matches_definition(s in "#?[0-9a-fA-FgG ]{0,9}") {
        prop_assume!(!s.is_empty());
        let digits = s.strip_prefix('#').unwrap_or(&s);
        let expected = matches!(digits.len(), 3 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        prop_assert_eq!(hex_code::is_valid_code(&s).unwrap(), expected);
    }

    #[test]
    fn short_long_roundtrip_keeps_rgb(code in valid_code()) {
        let short = hex_code::to_short(&code).unwrap();
        let long = hex_code::to_long(&short).unwrap();
        for which in Channel::ALL {
            prop_assert_eq!(
                hex_code::channel(&long, which).unwrap(),
                hex_code::channel(&code, which).unwrap()
            );
        }
    }

    #[test]
    fn bytes_roundtrip(a in any::<u8>(), r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let c = HexColor::from_argb(a, r, g, b);
        prop_assert_eq!((c.a(), c.r(), c.g(), c.b()), (a, r, g, b));
        prop_assert_eq!(HexColor::from_packed_argb(c.to_packed_argb()), c);
    }

    #[test]
    fn alpha_defaults_to_opaque(code in valid_code()) {
        prop_assume!(!hex_code::has_alpha(&code));
        prop_assert_eq!(hex_code::alpha(&code), 255);
    }

    #[test]
    fn set_then_get_channel(code in valid_code(), which in channel(), value in any::<u8>()) {
        let updated = hex_code::set_channel(&code, which, value).unwrap();
        prop_assert_eq!(hex_code::channel(&updated, which).unwrap(), value);
        prop_assert_eq!(hex_code::alpha(&updated), hex_code::alpha(&code));

        let c = HexColor::parse(&code).unwrap().with_channel(which, value);
        prop_assert_eq!(c.channel(which), value);
        prop_assert!(!c.is_short());
    }

    #[test]
    fn parsed_hash_matches_byte_built(code in valid_code()) {
        let parsed = HexColor::parse(&code).unwrap();
        prop_assert!(!parsed.is_short());

        let c = parsed.argb();
        let built = if parsed.has_alpha() {
            HexColor::from_argb(c.a, c.r, c.g, c.b)
        } else {
            HexColor::from_rgb(c.r, c.g, c.b)
        };
        prop_assert_eq!(parsed, built);
        prop_assert_eq!(hash_of(&parsed), hash_of(&built));
    }

    #[test]
    fn equality_is_form_independent(code in valid_code()) {
        let c = HexColor::parse(&code).unwrap();
        prop_assert_eq!(c.to_long_code(), c);
        prop_assert_eq!(c.to_short_code().fill(), c.fill());
    }
}

#[test]
fn gamma_roundtrip_all_bytes() {
    for b in 0..=255u8 {
        let linear = srgb::eotf(b);
        assert!((0.0..=1.0).contains(&linear));
        let back = srgb::oetf(linear);
        assert!((back as i16 - b as i16).abs() <= 1, "b={b} back={back}");
    }
}
