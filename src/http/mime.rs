//! MIME type detection module
//!
//! Resolves Content-Type from a file extension. A per-instance override
//! table is consulted first, then the built-in default table.

use std::collections::HashMap;
use std::path::Path;

/// Immutable extension-to-MIME override table.
///
/// Keys are lowercase extensions with the leading dot (e.g. ".ts"). Built
/// once at startup from configuration and never mutated afterwards, so it
/// can be shared freely across request handlers.
#[derive(Debug, Clone)]
pub struct ContentTypeMap {
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    /// Build the table, normalizing keys to lowercase dotted form
    pub fn new(overrides: &HashMap<String, String>) -> Self {
        let overrides = overrides
            .iter()
            .map(|(ext, mime)| {
                let key = if ext.starts_with('.') {
                    ext.to_lowercase()
                } else {
                    format!(".{}", ext.to_lowercase())
                };
                (key, mime.clone())
            })
            .collect();
        Self { overrides }
    }

    /// Resolve the Content-Type for a file path.
    ///
    /// Extension matching is case-insensitive. An entry in the override
    /// table wins over the default table; extensions known to neither fall
    /// back to `application/octet-stream`.
    pub fn content_type_for(&self, path: &Path) -> &str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        if let Some(ref ext) = ext {
            if let Some(mime) = self.overrides.get(&format!(".{ext}")) {
                return mime;
            }
        }

        default_content_type(ext.as_deref())
    }
}

/// Get the default MIME Content-Type for a lowercase file extension
pub fn default_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(entries: &[(&str, &str)]) -> ContentTypeMap {
        let overrides = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ContentTypeMap::new(&overrides)
    }

    #[test]
    fn test_default_table() {
        assert_eq!(
            default_content_type(Some("html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(default_content_type(Some("css")), "text/css");
        assert_eq!(default_content_type(Some("js")), "application/javascript");
        assert_eq!(default_content_type(Some("json")), "application/json");
        assert_eq!(default_content_type(Some("png")), "image/png");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(
            default_content_type(Some("xyz")),
            "application/octet-stream"
        );
        assert_eq!(default_content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_override_wins() {
        let map = map_with(&[(".ts", "application/javascript")]);
        assert_eq!(
            map.content_type_for(Path::new("main.ts")),
            "application/javascript"
        );

        // An override beats the default table entry for the same extension
        let map = map_with(&[(".json", "text/plain")]);
        assert_eq!(map.content_type_for(Path::new("data.json")), "text/plain");
    }

    #[test]
    fn test_override_lookup_is_case_insensitive() {
        let map = map_with(&[(".TSX", "application/javascript")]);
        assert_eq!(
            map.content_type_for(Path::new("App.TSX")),
            "application/javascript"
        );
        assert_eq!(
            map.content_type_for(Path::new("app.tsx")),
            "application/javascript"
        );
    }

    #[test]
    fn test_non_overridden_uses_default_table() {
        let map = map_with(&[(".ts", "application/javascript")]);
        assert_eq!(
            map.content_type_for(Path::new("data.json")),
            "application/json"
        );
        assert_eq!(
            map.content_type_for(Path::new("blob.xyz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_keys_without_leading_dot_are_normalized() {
        let map = map_with(&[("ts", "application/javascript")]);
        assert_eq!(
            map.content_type_for(Path::new("main.ts")),
            "application/javascript"
        );
    }
}
