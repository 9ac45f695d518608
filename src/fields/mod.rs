pub mod duration;
pub mod name;
pub mod timestamp;
pub mod zipcode;

// U+FFFD is what the lossy decoder substitutes for bytes it could not
// recover. Structured fields cannot tolerate it.
pub(crate) fn has_replacement_char(s: &str) -> bool {
    s.contains('\u{FFFD}')
}
