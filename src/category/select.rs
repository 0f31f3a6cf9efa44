use sha2::{Digest, Sha256};

use super::CategoryTable;

/// Stable 64-bit digest of the combined recipe text.
///
/// SHA-256 rather than the standard library hasher: the selected index must
/// survive process restarts and stay identical across platforms and crate
/// versions. The first eight digest bytes are taken big-endian.
fn stable_hash(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

impl CategoryTable {
    /// Pick a 1-based image index within `category` for this recipe.
    ///
    /// The index is a pure function of the lowercased title + ingredients
    /// text: identical inputs always produce the identical index. When the
    /// text matches a category's sub-keyword set (e.g. "kimchi" within
    /// rice), the modulus narrows to a sub-range presumed to hold more
    /// relevant images. Best-effort, not a relevance guarantee.
    ///
    /// An unknown category yields index 1.
    pub fn select_index(&self, category: &str, title: &str, ingredients: &[String]) -> u32 {
        let Some(bound) = self.bound(category) else {
            return 1;
        };

        let title_lower = title.to_lowercase();
        let ingredients_text = ingredients.join(" ").to_lowercase();
        let combined = format!("{} {}", title_lower, ingredients_text);

        let mut modulus = bound;
        if let Some(ranges) = self.sub_ranges.get(category) {
            for range in ranges {
                if range
                    .keywords
                    .iter()
                    .any(|kw| combined.contains(kw.as_str()))
                {
                    modulus = range.bound;
                    break;
                }
            }
        }

        (stable_hash(&combined) % modulus as u64) as u32 + 1
    }
}
