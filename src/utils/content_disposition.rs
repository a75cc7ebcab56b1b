/// Picks the download filename out of a `content-disposition` header.
///
/// Prefers the RFC 5987 `filename*=UTF-8''...` form, then `filename=`.
/// Anything absent, empty or path-like yields `fallback`.
pub fn filename_from_content_disposition(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(|value| extended_filename(value).or_else(|| plain_filename(value)))
        .and_then(sanitize)
        .unwrap_or_else(|| fallback.to_string())
}

/// Splits on `;` outside quoted strings, honouring `\"` escapes
fn split_unquoted(header: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let (mut start, mut quoted, mut escaped) = (0, false, false);
    for (i, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ';' if !quoted => {
                parts.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&header[start..]);
    parts
}

fn params(header: &str) -> impl Iterator<Item = (String, &str)> {
    split_unquoted(header).into_iter().skip(1).filter_map(|part| {
        let (key, value) = part.split_once('=')?;
        Some((key.trim().to_ascii_lowercase(), value.trim()))
    })
}

fn extended_filename(header: &str) -> Option<String> {
    let (_, value) = params(header).find(|(key, _)| key == "filename*")?;
    let (charset, rest) = value.split_once('\'')?;
    let (_, encoded) = rest.split_once('\'')?;
    if !charset.eq_ignore_ascii_case("utf-8") {
        return None;
    }
    urlencoding::decode(encoded.trim_matches('"'))
        .ok()
        .map(|s| s.into_owned())
}

fn plain_filename(header: &str) -> Option<String> {
    let (_, value) = params(header).find(|(key, _)| key == "filename")?;
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some(value.replace("\\\"", "\""))
}

fn sanitize(name: String) -> Option<String> {
    let name = name.trim();
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
