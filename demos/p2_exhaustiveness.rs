//! Pattern 2: Exhaustiveness over a Closed Variant Set
//! Example: The Compiler Checks Every Match
//!
//! Run with: cargo run --example p2_exhaustiveness

use enum_associated_values::Barcode;

// A local mirror of the library enum, so this file can demonstrate
// what happens when the variant set grows.
#[derive(Debug)]
enum LabelFormat {
    Upc(u32, u32, u32, u32),
    QrCode(String),
    // Try uncommenting this to see the compiler error in both
    // matches below:
    // DataMatrix { rows: u8, cols: u8 },
}

fn label_kind(format: &LabelFormat) -> &'static str {
    // No wildcard arm: adding DataMatrix makes this a compile error
    // until the new case is handled.
    match format {
        LabelFormat::Upc(..) => "one-dimensional",
        LabelFormat::QrCode(_) => "two-dimensional",
    }
}

fn label_summary(format: &LabelFormat) -> String {
    match format {
        LabelFormat::Upc(ns, mfr, prod, check) => {
            format!("UPC: {}, {}, {}, {}.", ns, mfr, prod, check)
        }
        LabelFormat::QrCode(payload) => format!("QR code: {}.", payload),
    }
}

fn main() {
    println!("=== Exhaustive Matching ===");
    // Usage: every variant is handled, so no input can fall through.
    let labels = [
        LabelFormat::Upc(8, 85909, 51226, 3),
        LabelFormat::QrCode("ABCDEFGHIJKLMNOP".to_string()),
    ];

    for label in &labels {
        println!("  {} -> {}", label_kind(label), label_summary(label));
    }

    // The library enum gives the same guarantee: describe() has no
    // wildcard arm either.
    let code = Barcode::Upc(8, 85909, 51226, 3);
    assert_eq!(code.describe(), "UPC: 8, 85909, 51226, 3.");

    println!("\n=== What Exhaustiveness Buys You ===");
    println!("The 'unmatched variant' failure class does not exist at runtime:");
    println!("  1. The variant set is closed and known at compile time");
    println!("  2. Every match must cover it or name a wildcard on purpose");
    println!("  3. Adding a variant turns every stale match into a build error");
    println!("\nContrast with p3_unmatched_variant, where the tag is data and");
    println!("the same check has to happen at runtime.");
}
