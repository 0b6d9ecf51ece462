// src/core/sanitize.rs

/// Turn arbitrary text (e.g. a host name) into a safe file stem.
/// Keeps ASCII alphanumerics and `-`; every other run of characters becomes one `_`.
/// Falls back to `fallback` when nothing usable remains.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { s!(fallback) } else { s!(out) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_become_stems() {
        assert_eq!(sanitize_file_stem("en.wikipedia.org", "table"), "en_wikipedia_org");
        assert_eq!(sanitize_file_stem("my-site.example", "table"), "my-site_example");
    }

    #[test]
    fn runs_of_junk_collapse() {
        assert_eq!(sanitize_file_stem("a  //  b", "x"), "a_b");
        assert_eq!(sanitize_file_stem("__ok__", "x"), "ok");
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(sanitize_file_stem("", "table"), "table");
        assert_eq!(sanitize_file_stem("???", "table"), "table");
    }
}
