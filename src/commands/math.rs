use std::io::Write;

use rand::Rng;

use crate::Error;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn random_string<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draws two values from `[min, max]` (inclusive) and returns them with their product.
///
/// The caller guarantees `min <= max`.
pub fn random_product<R: Rng>(rng: &mut R, min: i64, max: i64) -> (i64, i64, i64) {
    let val1 = rng.gen_range(min..=max);
    let val2 = rng.gen_range(min..=max);
    (val1, val2, val1 * val2)
}

pub fn print_random_product<R: Rng, W: Write>(
    rng: &mut R,
    min: i64,
    max: i64,
    out: &mut W,
) -> Result<(i64, i64, i64), Error> {
    let (val1, val2, product) = random_product(rng, min, max);
    log::debug!("Drew {} and {} from [{}, {}]", val1, val2, min, max);
    writeln!(out, "{} * {} = {}", val1, val2, product)
        .map_err(|e| Error::Output(format!("Failed to print product: {}", e)))?;
    Ok((val1, val2, product))
}
