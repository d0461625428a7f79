//! Documentation comments for generated items.

/// Renders `text` as a block doc comment (`/** ... */`) followed by a newline.
///
/// Rust block comments nest, so both `*/` and `/*` inside the text are split
/// with a space; carriage returns are normalized to line feeds because bare
/// CR is rejected inside doc comments. Blank text renders nothing.
#[must_use]
pub fn doc_block(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!("/**\n{}\n*/\n", escape(text))
}

/// Makes `text` safe to embed in a block comment.
#[must_use]
pub fn escape(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    for c in text.chars() {
        if matches!((prev, c), (Some('*'), '/') | (Some('/'), '*')) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
