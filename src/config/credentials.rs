// src/config/credentials.rs
//
// The harvest never logs in by itself. It borrows the session cookie of a
// browser login, either as raw `Cookie` header text or as the JSON cookie
// list a browser automation tool dumps (`[{"name": .., "value": ..}, ..]`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no session cookie given (use --cookie, --cookie-file or FLIGHTSCOPE_COOKIE)")]
    Missing,
    #[error("cookie file {path} could not be read: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cookie file {path} is not a valid cookie list: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Deserialize)]
struct BrowserCookie {
    name: String,
    value: String,
}

/// Build a `Cookie` header value from whatever the user handed us.
/// A direct value wins over a file.
pub fn resolve_cookie(direct: Option<&str>, file: Option<&Path>) -> Result<String, CredentialError> {
    if let Some(v) = direct.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(v.to_string());
    }
    match file {
        Some(path) => load_cookie_file(path),
        None => Err(CredentialError::Missing),
    }
}

pub fn load_cookie_file(path: &Path) -> Result<String, CredentialError> {
    let text = fs::read_to_string(path)
        .map_err(|source| CredentialError::Read { path: path.to_path_buf(), source })?;
    parse_cookie_text(&text)
        .map_err(|source| CredentialError::Json { path: path.to_path_buf(), source })?
        .ok_or(CredentialError::Missing)
}

/// `Ok(None)` when the text holds no cookie at all.
fn parse_cookie_text(text: &str) -> Result<Option<String>, serde_json::Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if !text.starts_with('[') {
        return Ok(Some(text.to_string()));
    }

    let jar: Vec<BrowserCookie> = serde_json::from_str(text)?;
    let header = jar
        .iter()
        .filter(|c| !c.name.is_empty())
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ");

    Ok(if header.is_empty() { None } else { Some(header) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_header_text_is_kept() {
        let got = parse_cookie_text("  wordpress_logged_in=abc; PHPSESSID=42\n").unwrap();
        assert_eq!(got.as_deref(), Some("wordpress_logged_in=abc; PHPSESSID=42"));
    }

    #[test]
    fn browser_dump_is_joined() {
        let dump = r#"[
            {"name": "a", "value": "1", "domain": ".myflightscope.com"},
            {"name": "b", "value": "two", "httpOnly": true}
        ]"#;
        let got = parse_cookie_text(dump).unwrap();
        assert_eq!(got.as_deref(), Some("a=1; b=two"));
    }

    #[test]
    fn empty_inputs_are_missing() {
        assert_eq!(parse_cookie_text("   ").unwrap(), None);
        assert_eq!(parse_cookie_text("[]").unwrap(), None);
        assert!(matches!(resolve_cookie(Some("  "), None), Err(CredentialError::Missing)));
    }

    #[test]
    fn direct_value_wins() {
        let got = resolve_cookie(Some("x=1"), Some(Path::new("/nonexistent/cookie.txt"))).unwrap();
        assert_eq!(got, "x=1");
    }
}
