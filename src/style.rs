//! Inline style parsing and color normalization

use std::collections::HashMap;

use crate::errors::StyleError;

/// The default draw color for paths, ellipses and the helper functions.
pub const BLACK: &str = "#000000";

/// Parse an inline `style` attribute into a property map.
///
/// The grammar is `;`-separated `key:value` declarations. Keys and values
/// are whitespace-trimmed; empty declarations (a trailing `;`) are skipped;
/// a declaration without a `:` is a fatal error.
pub fn parse_declarations(input: &str) -> Result<HashMap<String, String>, StyleError> {
    let mut properties = HashMap::new();
    for declaration in input.split(';') {
        if declaration.trim().is_empty() {
            continue;
        }
        let (key, value) =
            declaration
                .split_once(':')
                .ok_or_else(|| StyleError::MalformedDeclaration {
                    declaration: declaration.to_string(),
                })?;
        properties.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(properties)
}

/// Normalize a color to the `#rrggbb` form the calculator expects.
///
/// Values already in `#...` form pass through untouched; `rgb(r,g,b)`
/// triples are converted to lowercase hex. Anything else is a fatal
/// unsupported-color error, never a silent default.
pub fn normalize_color(value: &str) -> Result<String, StyleError> {
    if value.starts_with('#') {
        return Ok(value.to_string());
    }

    if let Some(body) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<&str> = body.split(',').collect();
        if channels.len() == 3 {
            let mut rgb = [0u8; 3];
            for (slot, channel) in rgb.iter_mut().zip(&channels) {
                *slot = channel
                    .trim()
                    .parse()
                    .map_err(|_| StyleError::UnsupportedColor {
                        value: value.to_string(),
                    })?;
            }
            return Ok(format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]));
        }
    }

    Err(StyleError::UnsupportedColor {
        value: value.to_string(),
    })
}
