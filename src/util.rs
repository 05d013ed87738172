#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

/// Rewrites a header name into its canonical form: the first letter and every
/// letter following a hyphen are uppercased, all other letters lowercased
/// (`content-type` becomes `Content-Type`).
///
/// Values that are not valid HTTP tokens are returned trimmed but otherwise
/// untouched so validation can report them verbatim.
pub fn canonical_header_name(value: &str) -> String {
    let trimmed = value.trim();
    if !is_http_token(trimmed) {
        return trimmed.to_string();
    }

    let mut canonical = String::with_capacity(trimmed.len());
    let mut upper = true;
    for byte in trimmed.bytes() {
        let ch = if upper {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        };
        canonical.push(ch as char);
        upper = byte == b'-';
    }
    canonical
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
