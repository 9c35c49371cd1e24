use std::collections::HashSet;

use rand::Rng;

const SKU_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Issue a product SKU not present in `issued`.
///
/// Format: two uppercase letters followed by six digits. The caller owns the
/// issued set and keeps it across one dataset generation; a collision is
/// resolved by redrawing. Returns the SKU and how many redraws it took
/// (collision probability per draw is about 1 in 6 million, so in practice
/// zero).
pub fn unique_sku(rng: &mut impl Rng, issued: &HashSet<String>) -> (String, u64) {
    let mut retries = 0;
    loop {
        let mut sku = String::with_capacity(8);
        for _ in 0..2 {
            sku.push(SKU_LETTERS[rng.random_range(0..SKU_LETTERS.len())] as char);
        }
        let number: u32 = rng.random_range(100_000..=999_999);
        sku.push_str(&number.to_string());

        if !issued.contains(&sku) {
            return (sku, retries);
        }
        retries += 1;
    }
}
