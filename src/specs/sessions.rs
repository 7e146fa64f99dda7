// src/specs/sessions.rs
use crate::config::HarvestOptions;
use crate::core::xml::{self, XmlError};
use crate::model::Session;

use super::Form;

pub const METHOD: &str = "listSessionsWithScoreForPlayerAndFilter";

pub fn list_form(opts: &HarvestOptions, start_index: usize, count: usize) -> Form {
    vec![
        ("playerID", opts.player_id.clone()),
        ("filterApp", s!("All")),
        ("filterStartDate", opts.window.start_param()),
        ("filterEndDate", opts.window.end_param()),
        ("startIndex", start_index.to_string()),
        ("count", count.to_string()),
        ("method", s!(METHOD)),
    ]
}

/// Decode one listing page, preserving document order.
pub fn parse_page(doc: &str) -> Result<Vec<Session>, XmlError> {
    let body = xml::check_document(doc)?;
    let text = |el: &str, name: &str| xml::child_text(el, name).unwrap_or_default();

    Ok(xml::elements(body, "Session")?
        .into_iter()
        .map(|el| Session {
            id: text(el, "sessionID"),
            display_name: text(el, "sessionDisplayName"),
            create_date: text(el, "sessionCreateDate"),
            app_version: text(el, "appVersion"),
            location: text(el, "sessionLocation"),
            type_id: text(el, "sessionTypeID"),
        })
        .collect())
}
