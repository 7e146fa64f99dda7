// src/core/xml.rs
// Tolerant element scanning for the flat XML documents the remote returns.
// Tag names are matched exactly (XML is case-sensitive) and on a name
// boundary, so `<Session` never matches `<SessionList>`. No nesting of
// same-named elements is expected.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("document is empty")]
    Empty,
    #[error("not an XML document (starts with {0:?})")]
    NotXml(String),
    #[error("<{tag}> opened at byte {at} is never closed")]
    Unterminated { tag: String, at: usize },
}

/// One element found by [`next_element`]: its inner text span and where scanning resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    pub inner: &'a str,
    pub end: usize,
}

/// Strip an optional `<?xml …?>` prolog and surrounding whitespace.
pub fn strip_prolog(doc: &str) -> &str {
    let doc = doc.trim();
    if doc.starts_with("<?") {
        if let Some(end) = doc.find("?>") {
            return doc[end + 2..].trim_start();
        }
    }
    doc
}

/// Reject bodies that cannot be an XML document at all (empty, JSON, plain text).
pub fn check_document(doc: &str) -> Result<&str, XmlError> {
    let body = strip_prolog(doc);
    if body.is_empty() {
        return Err(XmlError::Empty);
    }
    if !body.starts_with('<') {
        let head: String = body.chars().take(24).collect();
        return Err(XmlError::NotXml(head));
    }
    Ok(body)
}

/// Find the next `<name …>…</name>` (or `<name/>`) at or after `from`.
pub fn next_element<'a>(s: &'a str, name: &str, from: usize) -> Result<Option<Element<'a>>, XmlError> {
    let open = format!("<{name}");
    let close = format!("</{name}>");

    let mut pos = from;
    while let Some(rel) = s.get(pos..).and_then(|rest| rest.find(&open)) {
        let start = pos + rel;
        let after_name = start + open.len();

        // name boundary: `<Session>`, `<Session attr=..>`, `<Session/>`
        let boundary = s[after_name..].chars().next();
        if !matches!(boundary, Some('>' | '/') | Some(' ' | '\t' | '\r' | '\n')) {
            pos = after_name;
            continue;
        }

        let open_end = match s[after_name..].find('>') {
            Some(i) => after_name + i,
            None => return Err(XmlError::Unterminated { tag: name.to_string(), at: start }),
        };
        if s[..open_end].ends_with('/') {
            return Ok(Some(Element { inner: "", end: open_end + 1 }));
        }

        let body_start = open_end + 1;
        let body_len = s[body_start..]
            .find(&close)
            .ok_or_else(|| XmlError::Unterminated { tag: name.to_string(), at: start })?;
        return Ok(Some(Element {
            inner: &s[body_start..body_start + body_len],
            end: body_start + body_len + close.len(),
        }));
    }
    Ok(None)
}

/// All `name` elements in document order.
pub fn elements<'a>(s: &'a str, name: &str) -> Result<Vec<&'a str>, XmlError> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(el) = next_element(s, name, pos)? {
        out.push(el.inner);
        pos = el.end;
    }
    Ok(out)
}

/// Inner span of the first direct child named `name`. Elements nested inside
/// other children are stepped over whole, so a grandchild never matches.
pub fn child_element<'a>(s: &'a str, name: &str) -> Result<Option<&'a str>, XmlError> {
    let mut pos = 0usize;
    while let Some(rel) = s.get(pos..).and_then(|rest| rest.find('<')) {
        let start = pos + rel;
        let rest = &s[start + 1..];

        // comments, CDATA and processing instructions carry no children
        if let Some(skip) = markup_len(rest) {
            pos = start + 1 + skip;
            continue;
        }

        let tag_len = rest
            .find(|c: char| c == '>' || c == '/' || c.is_whitespace())
            .unwrap_or(rest.len());
        let tag = &rest[..tag_len];
        if tag.is_empty() {
            pos = start + 1;
            continue;
        }

        let el = next_element(s, tag, start)?
            .ok_or_else(|| XmlError::Unterminated { tag: tag.to_string(), at: start })?;
        if tag == name {
            return Ok(Some(el.inner));
        }
        pos = el.end;
    }
    Ok(None)
}

/// Length of a `<!-- -->`, `<![CDATA[ ]]>` or `<? ?>` construct after its `<`.
fn markup_len(rest: &str) -> Option<usize> {
    let close = if rest.starts_with("!--") {
        "-->"
    } else if rest.starts_with("![CDATA[") {
        "]]>"
    } else if rest.starts_with('?') || rest.starts_with('!') {
        ">"
    } else {
        return None;
    };
    Some(rest.find(close).map_or(rest.len(), |i| i + close.len()))
}

/// Decoded text of the first direct `name` child, `None` if there is no such
/// child or the element is malformed.
pub fn child_text(s: &str, name: &str) -> Option<String> {
    let inner = child_element(s, name).ok()??.trim();
    let text = match inner.strip_prefix("<![CDATA[").and_then(|rest| rest.strip_suffix("]]>")) {
        Some(raw) => raw.to_string(),
        None => decode_entities(inner),
    };
    Some(text.trim().to_string())
}

/// Predefined entities plus numeric character references.
/// Unknown or malformed references are kept verbatim.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail.find(';').and_then(|semi| {
            let ent = &tail[1..semi];
            let ch = match ent {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => numeric_ref(ent),
            };
            ch.map(|c| (c, semi + 1))
        });
        match decoded {
            Some((c, used)) => {
                out.push(c);
                rest = &tail[used..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn numeric_ref(ent: &str) -> Option<char> {
    let num = ent.strip_prefix('#')?;
    let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => num.parse().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_boundary_is_respected() {
        let doc = "<SessionList><Session><sessionID>1</sessionID></Session></SessionList>";
        let found = elements(doc, "Session").unwrap();
        assert_eq!(found, vec!["<sessionID>1</sessionID>"]);
    }

    #[test]
    fn self_closing_child_is_empty() {
        let s = "<sessionLocation/><sessionID>7</sessionID>";
        assert_eq!(child_text(s, "sessionLocation").as_deref(), Some(""));
        assert_eq!(child_text(s, "sessionID").as_deref(), Some("7"));
        assert_eq!(child_text(s, "appVersion"), None);
    }

    #[test]
    fn only_direct_children_are_read() {
        let s = "<Best><sessionID>999</sessionID><!-- <sessionID>0</sessionID> --></Best>\
                 <Note/><sessionID>1</sessionID>";
        assert_eq!(child_text(s, "sessionID").as_deref(), Some("1"));
        assert_eq!(child_text("<Best><appVersion>old</appVersion></Best>", "appVersion"), None);
        assert_eq!(child_element("<a>1</a><b>2", "b"), Err(XmlError::Unterminated { tag: "b".into(), at: 8 }));
    }

    #[test]
    fn unterminated_element_is_an_error() {
        let err = elements("<Sessions><Session><sessionID>1", "Session").unwrap_err();
        assert!(matches!(err, XmlError::Unterminated { ref tag, .. } if tag == "Session"));
    }

    #[test]
    fn entities_and_cdata() {
        assert_eq!(decode_entities("Range &amp; Course &#38; &#x41;&lt;"), "Range & Course & A<");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(child_text("<n><![CDATA[x < y]]></n>", "n").as_deref(), Some("x < y"));
    }

    #[test]
    fn document_check() {
        assert_eq!(check_document("  "), Err(XmlError::Empty));
        assert!(matches!(check_document("{\"a\":1}"), Err(XmlError::NotXml(_))));
        assert_eq!(check_document("<?xml version=\"1.0\"?>\n<Root/>"), Ok("<Root/>"));
    }
}
