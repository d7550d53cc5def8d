/// Fold the accented letters the screening vocabulary relies on to ASCII.
/// Input is expected to be lower-cased already.
fn fold_diacritics(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Normalize free text for substring comparison: absence becomes the empty
/// string, then trim, lower-case, and fold diacritics.
pub(crate) fn normalize(value: Option<&str>) -> String {
    let trimmed = value.unwrap_or_default().trim();
    fold_diacritics(&trimmed.to_lowercase())
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: Option<&str>) -> String {
    normalize(value)
}
