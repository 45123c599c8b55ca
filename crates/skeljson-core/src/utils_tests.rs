use crate::utils::{differs_from, non_default, rgba_hex};

#[test]
fn hex_is_padded_and_uppercase() {
    assert_eq!(rgba_hex(0), "00000000");
    assert_eq!(rgba_hex(0xff00aa10), "FF00AA10");
    assert_eq!(rgba_hex(0x1), "00000001");
}

#[test]
fn hex_of_negative_int_bits() {
    assert_eq!(rgba_hex(-1i32 as u32), "FFFFFFFF");
}

#[test]
fn default_tolerance() {
    assert!(!differs_from(1.0, 1.0));
    assert!(!differs_from(1.000005, 1.0));
    assert!(differs_from(1.0001, 1.0));
    assert!(differs_from(1.5, 1.0));
    assert!(differs_from(-0.0001, 0.0));
}

#[test]
fn non_default_suppresses() {
    assert_eq!(non_default(1.0, 1.0), None);
    assert_eq!(non_default(1.5, 1.0), Some(1.5));
    assert_eq!(non_default(0.000005, 0.0), None);
    assert_eq!(non_default(0.0001, 0.0), Some(0.0001));
}
