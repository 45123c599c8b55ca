/// Tolerance under which a float is considered equal to its default.
pub const DEFAULT_EPSILON: f32 = 1e-5;

/// Render a packed color as uppercase hex, one byte per channel.
///
/// # Examples
/// ```
/// use skeljson_core::utils::rgba_hex;
/// assert_eq!(rgba_hex(0xFFFFFFFF), "FFFFFFFF");
/// assert_eq!(rgba_hex(0x0080FF7F), "0080FF7F");
/// ```
pub fn rgba_hex(rgba: u32) -> String {
    format!("{rgba:08X}")
}

/// Whether `value` differs from `default` by at least [`DEFAULT_EPSILON`].
///
/// # Examples
/// ```
/// use skeljson_core::utils::differs_from;
/// assert!(!differs_from(1.000005, 1.0));
/// assert!(differs_from(1.0001, 1.0));
/// ```
pub fn differs_from(value: f32, default: f32) -> bool {
    (value - default).abs() >= DEFAULT_EPSILON
}

/// `Some(value)` unless it is within tolerance of `default`.
pub fn non_default(value: f32, default: f32) -> Option<f32> {
    differs_from(value, default).then_some(value)
}
