//! Pattern 3: Runtime Tags and the Unmatched-Variant Error
//! Example: When the Variant Tag Arrives as Data
//!
//! Run with: cargo run --example p3_unmatched_variant

use enum_associated_values::{Barcode, ScanError};

fn main() {
    println!("=== Runtime-Tagged Construction ===");
    // Usage: a scanner hands us a tag string and raw payload data.
    // The compiler cannot check a string, so from_tag() re-does the
    // variant check at runtime and fails fast on anything unknown.
    let scans: [(&str, &[u32], &str); 4] = [
        ("upc", &[8, 85909, 51226, 3], ""),
        ("qr", &[], "ABCDEFGHIJKLMNOP"),
        ("ean13", &[4, 9, 0, 1], ""),
        ("upc", &[8, 85909, 51226], ""),
    ];

    for (tag, digits, text) in scans {
        match Barcode::from_tag(tag, digits, text) {
            Ok(code) => println!("  {:>5} -> {}", tag, code.describe()),
            Err(e) => println!("  {:>5} -> error: {}", tag, e),
        }
    }

    // The error is typed, so callers can branch on the failure kind.
    let err = Barcode::from_tag("ean13", &[], "").unwrap_err();
    assert_eq!(err, ScanError::UnmatchedVariant("ean13".to_string()));

    println!("\n=== Closed Set vs Open Set ===");
    println!("With the enum, 'unmatched variant' is a compile error.");
    println!("With a runtime tag it is a value: a ScanError the caller");
    println!("must handle, surfaced at the boundary where the tag enters.");
}
