use crate::canvas::error::CanvasError;

/// Normalize a client-supplied color to uppercase `#RRGGBB`.
///
/// Accepts `#RGB` and `#RRGGBB`, with or without the leading `#`. Anything
/// else is rejected so the store only ever holds one canonical spelling per
/// color.
pub fn normalize_color(value: &str) -> Result<String, CanvasError> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let invalid = || CanvasError::InvalidColor {
        value: value.to_string(),
    };

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match hex.len() {
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in hex.chars() {
                let c = c.to_ascii_uppercase();
                out.push(c);
                out.push(c);
            }
            Ok(out)
        }
        6 => Ok(format!("#{}", hex.to_ascii_uppercase())),
        _ => Err(invalid()),
    }
}
