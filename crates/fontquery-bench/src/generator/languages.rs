//! Synthetic language tags and display names.
//!
//! Base tags are lowercase letters counted in base 26: two letters for the
//! first 676 languages (`aa`, `ab`, ...), three letters for the next 17576,
//! and so on. Region variants append `_{REGION}` to the base tag.

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Region suffixes for variant tags, in the order they are handed out.
pub const REGIONS: &[&str] = &["US", "GB", "IN", "BR", "CN", "TW", "CA", "MX"];

/// Base language tag for the `index`-th language.
pub fn language_tag(index: usize) -> String {
    let mut width = 2;
    let mut n = index;
    let mut span = 26 * 26;
    while n >= span {
        n -= span;
        width += 1;
        span *= 26;
    }
    let mut tag = vec![b'a'; width];
    for slot in tag.iter_mut().rev() {
        *slot = LETTERS[n % 26];
        n /= 26;
    }
    tag.into_iter().map(char::from).collect()
}

/// Region variant tags of `base`; `count` is capped at [`REGIONS`].
pub fn variant_tags(base: &str, count: usize) -> impl Iterator<Item = String> + '_ {
    REGIONS
        .iter()
        .take(count)
        .map(move |region| format!("{base}_{region}"))
}

/// Display name shared by a base tag and its variants.
pub fn display_name(base: &str) -> String {
    format!("Language {}", base.to_uppercase())
}
