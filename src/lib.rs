//! # Enums with Associated Values & Destructuring Matches
//!
//! A `Barcode` is exactly one of a closed set of code formats, and each
//! format carries its own payload shape: a UPC is four numeric fields,
//! a QR code is a single string. Rust models this directly as an enum
//! with associated data, and `match` both selects the active variant and
//! binds its payload fields in one step.
//!
//! ## Patterns Covered
//!
//! 1. **Associated Values and Binding Styles**
//!    - Constructing variants with per-variant payloads
//!    - Whole-value reassignment between variants
//!    - Equivalent binding syntaxes producing identical output
//!
//! 2. **Exhaustiveness over a Closed Variant Set**
//!    - Wildcard-free matching checked by the compiler
//!
//! 3. **Runtime Tags and the Unmatched-Variant Error**
//!    - What the compile-time check becomes when the tag is data
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_associated_values
//! cargo run --example p1_binding_styles
//! cargo run --example p2_exhaustiveness
//! cargo run --example p3_unmatched_variant
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product code in one of two formats.
///
/// The variant set is closed: every `match` over a `Barcode` must handle
/// both cases, and adding a variant breaks every wildcard-free match
/// until it is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Barcode {
    /// One-dimensional barcode: number-system digit, manufacturer code,
    /// product code, check digit.
    Upc(u32, u32, u32, u32),
    /// Two-dimensional code carrying an encoded payload string.
    QrCode(String),
}

/// Errors from runtime-tagged construction via [`Barcode::from_tag`].
///
/// With the closed enum these conditions cannot arise: the compiler
/// rejects an unknown variant or a wrong payload arity before the
/// program runs. They exist only on the boundary where the variant tag
/// arrives as data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The tag names no known variant.
    #[error("unmatched variant tag `{0}`")]
    UnmatchedVariant(String),
    /// A UPC payload must have exactly four numeric fields.
    #[error("UPC payload has {0} fields, expected 4")]
    UpcArity(usize),
}

impl Barcode {
    /// Formats the active variant by destructuring its payload.
    ///
    /// The match is exhaustive with no wildcard arm, so a new variant
    /// is a compile error here rather than a silently missing case.
    pub fn describe(&self) -> String {
        match self {
            Barcode::Upc(number_system, manufacturer, product, check) => {
                format!(
                    "UPC: {}, {}, {}, {}.",
                    number_system, manufacturer, product, check
                )
            }
            Barcode::QrCode(payload) => format!("QR code: {}.", payload),
        }
    }

    /// Runtime-tagged construction.
    ///
    /// This is what a dynamically typed caller has to do instead of
    /// naming a variant in source: carry both payload shapes, let the
    /// tag decide which one is read, and fail fast when the tag names
    /// no known variant. `digits` feeds the `Upc` variant and `text`
    /// feeds `QrCode`; the other argument is ignored.
    pub fn from_tag(tag: &str, digits: &[u32], text: &str) -> Result<Barcode, ScanError> {
        match tag {
            "upc" => match digits {
                &[number_system, manufacturer, product, check] => {
                    Ok(Barcode::Upc(number_system, manufacturer, product, check))
                }
                _ => Err(ScanError::UpcArity(digits.len())),
            },
            "qr" => Ok(Barcode::QrCode(text.to_string())),
            other => Err(ScanError::UnmatchedVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod end_to_end {
        use super::*;

        #[test]
        fn upc_scenario() {
            let code = Barcode::Upc(8, 85909, 51226, 3);
            assert_eq!(code.describe(), "UPC: 8, 85909, 51226, 3.");
        }

        #[test]
        fn reassignment_to_qr_scenario() {
            let mut code = Barcode::Upc(8, 85909, 51226, 3);
            code = Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string());
            assert_eq!(code.describe(), "QR code: ABCDEFGHIJKLMNOP.");
        }

        #[test]
        fn reassignment_leaves_no_residual_payload() {
            let mut code = Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string());
            code = Barcode::Upc(0, 0, 0, 0);
            // Only the new variant's payload is observable.
            assert_eq!(code.describe(), "UPC: 0, 0, 0, 0.");
            assert!(!code.describe().contains("ABCDEFGHIJKLMNOP"));
        }
    }

    mod binding_styles {
        use super::*;

        // The two surface syntaxes for extracting a payload must be
        // indistinguishable by output. The library implements one; this
        // spells out the other and compares.
        fn describe_by_value(code: Barcode) -> String {
            match code {
                Barcode::Upc(a, b, c, d) => format!("UPC: {}, {}, {}, {}.", a, b, c, d),
                Barcode::QrCode(s) => format!("QR code: {}.", s),
            }
        }

        #[test]
        fn by_value_and_by_reference_agree() {
            let codes = [
                Barcode::Upc(8, 85909, 51226, 3),
                Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string()),
                Barcode::QrCode(String::new()),
            ];
            for code in codes {
                assert_eq!(code.describe(), describe_by_value(code.clone()));
            }
        }
    }

    mod qr_payload_edge_cases {
        use super::*;

        #[test]
        fn empty_string() {
            assert_eq!(Barcode::QrCode(String::new()).describe(), "QR code: .");
        }

        #[test]
        fn formatting_sensitive_characters() {
            let code = Barcode::QrCode("{}%s\n\t{0}".to_string());
            assert_eq!(code.describe(), "QR code: {}%s\n\t{0}.");
        }
    }

    mod runtime_tags {
        use super::*;

        #[test]
        fn known_tags_construct() {
            assert_eq!(
                Barcode::from_tag("upc", &[8, 85909, 51226, 3], ""),
                Ok(Barcode::Upc(8, 85909, 51226, 3))
            );
            assert_eq!(
                Barcode::from_tag("qr", &[], "ABCDEFGHIJKLMNOP"),
                Ok(Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string()))
            );
        }

        #[test]
        fn unknown_tag_fails_fast() {
            let err = Barcode::from_tag("ean13", &[], "").unwrap_err();
            assert_eq!(err, ScanError::UnmatchedVariant("ean13".to_string()));
            assert_eq!(err.to_string(), "unmatched variant tag `ean13`");
        }

        #[test]
        fn upc_arity_is_checked() {
            let err = Barcode::from_tag("upc", &[8, 85909, 51226], "").unwrap_err();
            assert_eq!(err, ScanError::UpcArity(3));
            assert_eq!(err.to_string(), "UPC payload has 3 fields, expected 4");
        }
    }

    mod serialization {
        use super::*;
        use serde_json::json;

        #[test]
        fn externally_tagged_json_shape() {
            let upc = serde_json::to_value(Barcode::Upc(8, 85909, 51226, 3)).unwrap();
            assert_eq!(upc, json!({ "Upc": [8, 85909, 51226, 3] }));

            let qr = serde_json::to_value(Barcode::QrCode("ABCDEFGHIJKLMNOP".into())).unwrap();
            assert_eq!(qr, json!({ "QrCode": "ABCDEFGHIJKLMNOP" }));
        }

        #[test]
        fn deserialization_restores_the_variant() {
            let code: Barcode = serde_json::from_str(r#"{"Upc":[8,85909,51226,3]}"#).unwrap();
            assert_eq!(code, Barcode::Upc(8, 85909, 51226, 3));
        }
    }

    proptest! {
        #[test]
        fn upc_bindings_extract_fields_in_order(a: u32, b: u32, c: u32, d: u32) {
            let code = Barcode::Upc(a, b, c, d);

            // Property 1: matching binds exactly (a, b, c, d) in order.
            match code {
                Barcode::Upc(w, x, y, z) => {
                    prop_assert_eq!((w, x, y, z), (a, b, c, d));
                }
                Barcode::QrCode(_) => prop_assert!(false, "wrong variant matched"),
            }

            // Property 2: describe embeds the same fields in the same order.
            prop_assert_eq!(
                Barcode::Upc(a, b, c, d).describe(),
                format!("UPC: {}, {}, {}, {}.", a, b, c, d)
            );
        }

        #[test]
        fn qr_binding_extracts_the_string_verbatim(s: String) {
            let code = Barcode::QrCode(s.clone());
            match &code {
                Barcode::QrCode(bound) => prop_assert_eq!(bound, &s),
                Barcode::Upc(..) => prop_assert!(false, "wrong variant matched"),
            }
            prop_assert_eq!(code.describe(), format!("QR code: {}.", s));
        }

        #[test]
        fn runtime_tag_agrees_with_direct_construction(a: u32, b: u32, c: u32, d: u32, s: String) {
            prop_assert_eq!(
                Barcode::from_tag("upc", &[a, b, c, d], ""),
                Ok(Barcode::Upc(a, b, c, d))
            );
            prop_assert_eq!(
                Barcode::from_tag("qr", &[], &s),
                Ok(Barcode::QrCode(s))
            );
        }
    }
}
