//! Build-Zeit Konfiguration
//!
//! Werte aus `.env` werden vom Build-Script als `option_env!` durchgereicht
//! und hier zur Compile-Zeit geparst.

/// Parst eine Dezimalzahl, liefert `default` bei fehlendem oder ungültigem Wert
///
/// ```
/// # use esp_core::env::parse_u32_or;
/// const BAUD: u32 = parse_u32_or(Some("9600"), 115_200);
/// assert_eq!(BAUD, 9600);
/// assert_eq!(parse_u32_or(None, 115_200), 115_200);
/// ```
pub const fn parse_u32_or(value: Option<&str>, default: u32) -> u32 {
    let bytes = match value {
        Some(text) => text.as_bytes(),
        None => return default,
    };
    if bytes.is_empty() {
        return default;
    }

    let mut result: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if !byte.is_ascii_digit() {
            return default;
        }
        result = match result.checked_mul(10) {
            Some(shifted) => match shifted.checked_add((byte - b'0') as u32) {
                Some(sum) => sum,
                None => return default,
            },
            None => return default,
        };
        i += 1;
    }
    result
}
