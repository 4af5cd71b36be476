//! Random palette index lists

use crate::generation::color::ColorPicker;
use crate::io::error::{Result, invalid_argument};
use rand::Rng;

/// Generate `length` independent indices, each uniform over `0..bits`
///
/// Entries are drawn with replacement, so values repeat freely.
///
/// # Errors
///
/// Returns `InvalidArgument` if `length` or `bits` is zero
pub fn generate_random_bitlist<R: Rng>(
    length: usize,
    bits: usize,
    rng: &mut R,
) -> Result<ColorPicker> {
    if length == 0 {
        return Err(invalid_argument(
            "length",
            &length,
            &"bitlist length must be positive",
        ));
    }
    if bits == 0 {
        return Err(invalid_argument(
            "bits",
            &bits,
            &"number of possible values must be positive",
        ));
    }

    let indices = (0..length).map(|_| rng.random_range(0..bits)).collect();
    Ok(ColorPicker::new(indices))
}
