//! BCD-Zerlegung und LCD-Treiber
//!
//! Das LCD (ITS-E0803) bekommt jede Ziffer als 4-Bit BCD auf den Datenleitungen
//! und übernimmt sie mit einem Puls auf der Auswahl-Leitung der Stelle.

use crate::traits::{DigitDisplay, DigitalOutput, HalError};

/// BCD-Code der die Anzeige einer Stelle dunkel schaltet (> 9)
pub const BLANK_CODE: u8 = 0x0F;

/// Zerlegt `value` in `K` Dezimalziffern, höchstwertige zuerst
///
/// Zu kurze Zahlen werden mit Nullen aufgefüllt, zu lange auf die
/// `K` niederwertigen Stellen gekürzt.
///
/// ```
/// # use esp_core::to_bcd_digits;
/// assert_eq!(to_bcd_digits::<3>(788), [7, 8, 8]);
/// assert_eq!(to_bcd_digits::<3>(5), [0, 0, 5]);
/// ```
pub fn to_bcd_digits<const K: usize>(value: u32) -> [u8; K] {
    let mut digits = [0u8; K];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

/// Pegel der 4 Datenleitungen für eine Ziffer (Bit 0 → Leitung 0)
pub fn digit_levels(digit: u8) -> [bool; 4] {
    core::array::from_fn(|bit| digit & (1 << bit) != 0)
}

/// LCD mit 4 BCD-Datenleitungen und `K` Stellen-Latches
pub struct BcdLcd<P, const K: usize> {
    data: [P; 4],
    select: [P; K],
}

impl<P: DigitalOutput, const K: usize> BcdLcd<P, K> {
    /// `select[0]` ist die höchstwertige Stelle
    pub fn new(data: [P; 4], select: [P; K]) -> Self {
        Self { data, select }
    }

    fn latch(&mut self, position: usize, code: u8) -> Result<(), HalError> {
        for (line, level) in self.data.iter_mut().zip(digit_levels(code)) {
            line.set_level(level)?;
        }
        let select = &mut self.select[position];
        select.set_high()?;
        select.set_low()
    }
}

impl<P: DigitalOutput, const K: usize> DigitDisplay for BcdLcd<P, K> {
    fn write(&mut self, value: u16) -> Result<(), HalError> {
        let digits = to_bcd_digits::<K>(value as u32);
        for (position, digit) in digits.into_iter().enumerate() {
            self.latch(position, digit)?;
        }
        Ok(())
    }

    fn off(&mut self) -> Result<(), HalError> {
        for position in 0..K {
            self.latch(position, BLANK_CODE)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bcd_digits_exact() {
        assert_eq!(to_bcd_digits::<3>(788), [7, 8, 8]);
    }

    #[test]
    fn test_to_bcd_digits_padded() {
        assert_eq!(to_bcd_digits::<3>(5), [0, 0, 5]);
        assert_eq!(to_bcd_digits::<4>(0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_to_bcd_digits_truncated() {
        assert_eq!(to_bcd_digits::<3>(12345), [3, 4, 5]);
    }

    #[test]
    fn test_digit_levels() {
        assert_eq!(digit_levels(0), [false; 4]);
        assert_eq!(digit_levels(5), [true, false, true, false]);
        assert_eq!(digit_levels(8), [false, false, false, true]);
        assert_eq!(digit_levels(BLANK_CODE), [true; 4]);
    }
}
