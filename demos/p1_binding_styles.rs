//! Pattern 1: Associated Values and Binding Styles
//! Example: Equivalent Binding Syntaxes
//!
//! Run with: cargo run --example p1_binding_styles

use enum_associated_values::Barcode;

// Old style: match on the reference explicitly, binding each field
// through `ref`. Verbose, but every binding is spelled out.
fn describe_explicit(code: &Barcode) -> String {
    match code {
        &Barcode::Upc(ref ns, ref mfr, ref prod, ref check) => {
            format!("UPC: {}, {}, {}, {}.", ns, mfr, prod, check)
        }
        &Barcode::QrCode(ref payload) => format!("QR code: {}.", payload),
    }
}

// Modern style: match ergonomics pick the binding mode for the whole
// pattern at once. Same bindings, same branch, same output.
fn describe_ergonomic(code: &Barcode) -> String {
    match code {
        Barcode::Upc(ns, mfr, prod, check) => {
            format!("UPC: {}, {}, {}, {}.", ns, mfr, prod, check)
        }
        Barcode::QrCode(payload) => format!("QR code: {}.", payload),
    }
}

fn main() {
    println!("=== Per-Field vs Whole-Pattern Binding ===");
    // Usage: both styles destructure the same value.
    let codes = [
        Barcode::Upc(8, 85909, 51226, 3),
        Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string()),
    ];

    for code in &codes {
        let explicit = describe_explicit(code);
        let ergonomic = describe_ergonomic(code);
        println!("  explicit:  {}", explicit);
        println!("  ergonomic: {}", ergonomic);

        // The distinction is surface syntax only. If these ever
        // diverge, one of the two is not a binding style but a bug.
        assert_eq!(explicit, ergonomic);
        assert_eq!(explicit, code.describe());
    }

    println!("\n=== Takeaway ===");
    println!("Where the binding mode is written changes nothing at runtime.");
    println!("Pick one style per codebase; the library exposes one describe().");
}
