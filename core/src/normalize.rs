use alloc::string::String;

const ITALIC_OPEN: &str = "<I>";
const ITALIC_CLOSE: &str = "</I>";

/// Upper-cases clue text and turns italic markup into quotation marks.
///
/// Tags are matched after upper-casing, so `<i>` and `<I>` are both caught.
/// Applying it twice gives the same result as applying it once.
pub fn normalize_clue_text(raw: &str) -> String {
    let text = raw.to_uppercase();
    if !text.contains(ITALIC_OPEN) {
        return text;
    }

    text.replace(ITALIC_OPEN, "\"")
        .replace(ITALIC_CLOSE, "\"")
        .to_uppercase()
}
