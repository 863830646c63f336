//! Shared digit-centering kernel.
//!
//! Every generator forms an intermediate product Y and keeps the D centre
//! digits of |Y|:
//!
//! ```text
//! digits(|Y|), prefixed with one '0' if the length is odd   -> length L
//! next = digits[⌊(L − D)/2⌋ .. ⌊(L − D)/2⌋ + D]
//! r    = next / 10^D
//! ```
//!
//! The parity zero is prepended at most once per step. The sign of Y appears
//! only in the rendered product string. State magnitudes stay below 10^19, so
//! products of two states fit exactly in 128 bits.

use prng_core::types::ConfigError;

/// Seeds and constants need strictly more digits than this.
pub const MIN_DIGITS_EXCLUSIVE: usize = 3;

/// Largest `f64` strictly below one.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Decimal digit count of |value| (zero has one digit).
///
/// # Examples
/// ```
/// use prng_models::generators::digits::digit_count;
///
/// assert_eq!(digit_count(1234), 4);
/// assert_eq!(digit_count(-98765), 5);
/// assert_eq!(digit_count(0), 1);
/// ```
pub fn digit_count(value: i64) -> usize {
    value
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log as usize + 1)
}

/// Digit width D of `value`, rejected when it is 3 or fewer.
pub(crate) fn require_width(input: &str, value: i64) -> Result<usize, ConfigError> {
    let digits = digit_count(value);
    if digits <= MIN_DIGITS_EXCLUSIVE {
        return Err(ConfigError::TooFewDigits {
            input: input.to_string(),
            value,
            digits,
        });
    }
    Ok(digits)
}

/// Reject an empty request.
pub(crate) fn ensure_length(n: usize) -> Result<(), ConfigError> {
    if n == 0 {
        return Err(ConfigError::ZeroLength);
    }
    Ok(())
}

/// Result of centering one intermediate product.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Product digits after the parity fix, with `-` for negative products.
    pub product: String,
    /// The D centre digits, leading zeros kept.
    pub digits: String,
    /// Numeric value of the centre digits; the next state.
    pub state: i128,
    /// `state / 10^D`.
    pub value: f64,
}

/// Fixed-width centre-digit extractor.
///
/// # Examples
/// ```
/// use prng_models::generators::digits::DigitWindow;
///
/// let window = DigitWindow::new(4);
/// let step = window.extract(1234 * 1234);
///
/// assert_eq!(step.product, "01522756");
/// assert_eq!(step.digits, "5227");
/// assert_eq!(step.state, 5227);
/// assert_eq!(step.value, 0.5227);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitWindow {
    width: usize,
}

impl DigitWindow {
    /// Window of `width` digits.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Digit width D.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Centre the decimal digits of `product`.
    ///
    /// When the parity-fixed length does not exceed D the whole magnitude is
    /// kept, zero-extended to D digits.
    pub fn extract(&self, product: i128) -> Extraction {
        let magnitude = product.unsigned_abs();
        let mut digits = magnitude.to_string();
        if digits.len() % 2 == 1 {
            digits.insert(0, '0');
        }
        let len = digits.len();

        let state = if len > self.width {
            let start = (len - self.width) / 2;
            let dropped = len - start - self.width;
            (magnitude / 10u128.pow(dropped as u32)) % 10u128.pow(self.width as u32)
        } else {
            magnitude
        };

        let product = if product < 0 {
            format!("-{}", digits)
        } else {
            digits
        };
        // state < 10^D <= 10^19
        let state = state as i128;

        Extraction {
            product,
            digits: format!("{:0width$}", state, width = self.width),
            state,
            value: self.fraction(state),
        }
    }

    /// `state / 10^D`, kept strictly below one for widths past `f64` precision.
    pub fn fraction(&self, state: i128) -> f64 {
        let value = state as f64 / 10f64.powi(self.width as i32);
        value.min(BELOW_ONE)
    }

    /// Render a state zero-padded to D digits, keeping a leading `-`.
    ///
    /// # Examples
    /// ```
    /// use prng_models::generators::digits::DigitWindow;
    ///
    /// let window = DigitWindow::new(4);
    /// assert_eq!(window.pad(42), "0042");
    /// assert_eq!(window.pad(-42), "-0042");
    /// assert_eq!(window.pad(123456), "123456");
    /// ```
    pub fn pad(&self, value: i128) -> String {
        if value < 0 {
            format!("-{:0width$}", value.unsigned_abs(), width = self.width)
        } else {
            format!("{:0width$}", value, width = self.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count_boundaries() {
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
        assert_eq!(digit_count(-1000), 4);
        assert_eq!(digit_count(i64::MAX), 19);
        assert_eq!(digit_count(i64::MIN), 19);
    }

    #[test]
    fn test_require_width() {
        assert_eq!(require_width("seed", 1234), Ok(4));
        assert_eq!(require_width("seed", -56789), Ok(5));
        assert_eq!(
            require_width("seed", 999),
            Err(ConfigError::TooFewDigits {
                input: "seed".to_string(),
                value: 999,
                digits: 3,
            })
        );
    }

    #[test]
    fn test_ensure_length() {
        assert!(ensure_length(1).is_ok());
        assert_eq!(ensure_length(0), Err(ConfigError::ZeroLength));
    }

    #[test]
    fn test_even_length_is_not_padded() {
        // 5227² = 27321529 (8 digits)
        let step = DigitWindow::new(4).extract(27_321_529);
        assert_eq!(step.product, "27321529");
        assert_eq!(step.digits, "3215");
    }

    #[test]
    fn test_single_parity_zero_only() {
        // 123 has 3 digits: one zero makes 4, never more.
        let step = DigitWindow::new(4).extract(123);
        assert_eq!(step.product, "0123");
        assert_eq!(step.digits, "0123");
        assert_eq!(step.state, 123);
    }

    #[test]
    fn test_leading_zero_digits_are_kept() {
        // 10000001 -> centre "0000"
        let step = DigitWindow::new(4).extract(10_000_001);
        assert_eq!(step.digits, "0000");
        assert_eq!(step.state, 0);
        assert_eq!(step.value, 0.0);
    }

    #[test]
    fn test_short_product_is_zero_extended() {
        let step = DigitWindow::new(4).extract(9);
        assert_eq!(step.product, "09");
        assert_eq!(step.digits, "0009");
        assert_eq!(step.state, 9);
        assert_eq!(step.value, 0.0009);
    }

    #[test]
    fn test_negative_product_sign_only_in_product() {
        let positive = DigitWindow::new(4).extract(1_522_756);
        let negative = DigitWindow::new(4).extract(-1_522_756);
        assert_eq!(negative.product, "-01522756");
        assert_eq!(negative.digits, positive.digits);
        assert_eq!(negative.state, positive.state);
    }

    #[test]
    fn test_wide_products_stay_exact() {
        let x: i128 = 9_999_999_999_999_999_999;
        let step = DigitWindow::new(19).extract(x * x);
        assert_eq!(step.digits.len(), 19);
        assert!(step.value < 1.0);
    }

    #[test]
    fn test_odd_width_centering() {
        // 12345² = 152399025 (9 digits) -> "0152399025", start (10-5)/2 = 2
        let step = DigitWindow::new(5).extract(152_399_025);
        assert_eq!(step.product, "0152399025");
        assert_eq!(step.digits, "52399");
    }
}
