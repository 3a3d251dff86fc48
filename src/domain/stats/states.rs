//! State-name normalization for map lookups and aggregation keys.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases and strips accents from a state name.
///
/// NFD-decomposes the string and drops combining marks, so "São Paulo",
/// "são paulo" and "SAO PAULO" all normalize to `"sao paulo"`. Used to key
/// aggregation buckets and to match the GeoJSON names on the choropleth.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
