//! Pattern 1: Associated Values and Binding Styles
//! Example: Enum Variants Carrying Data
//!
//! Run with: cargo run --example p1_associated_values

use enum_associated_values::Barcode;

fn main() {
    // Usage: construct a variant with exactly the payload its shape
    // requires. Upc takes four integers; QrCode takes one string.
    // Upc(8, 85909) or QrCode(1, 2) would not compile.
    let mut product_barcode = Barcode::Upc(8, 85909, 51226, 3);

    // Match extracts the payload into named bindings for the branch.
    match &product_barcode {
        Barcode::Upc(number_system, manufacturer, product, check) => {
            println!("UPC: {}, {}, {}, {}.", number_system, manufacturer, product, check);
        }
        Barcode::QrCode(payload) => {
            println!("QR code: {}.", payload);
        }
    }

    // Reassignment swaps tag and payload together. There is no state
    // where the value is a QrCode still holding UPC digits.
    product_barcode = Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string());

    match &product_barcode {
        Barcode::Upc(number_system, manufacturer, product, check) => {
            println!("UPC: {}, {}, {}, {}.", number_system, manufacturer, product, check);
        }
        Barcode::QrCode(payload) => {
            println!("QR code: {}.", payload);
        }
    }

    // The library's describe() is the same match packaged as a method.
    assert_eq!(product_barcode.describe(), "QR code: ABCDEFGHIJKLMNOP.");

    println!("\n=== Why Associated Values ===");
    println!("A bare enum can only say WHICH case a value is.");
    println!("Associated values let each case carry its own data,");
    println!("and match gives you both answers in one construct.");
}
