// src/scrape/sessions.rs
use log::{info, warn};

use crate::config::HarvestOptions;
use crate::core::{Transport, TransportError};
use crate::model::Session;
use crate::specs::{self, sessions as spec};

use super::HarvestError;

/// Page through the whole session catalog, keeping the remote's order.
///
/// Ends on an empty page, a short page, a page that fails to parse, or a
/// network failure; sessions gathered before that point are kept. An HTTP
/// error status aborts the whole harvest.
pub fn list_sessions(client: &dyn Transport, opts: &HarvestOptions) -> Result<Vec<Session>, HarvestError> {
    let page_size = opts.page_size.max(1);
    let mut all = Vec::new();
    let mut start = 0usize;

    loop {
        let form = spec::list_form(opts, start, page_size);
        let doc = match specs::post(client, &form) {
            Ok(doc) => doc,
            Err(e) if e.is_fatal() => return Err(HarvestError::Client(e)),
            Err(e @ TransportError::Status { .. }) => return Err(HarvestError::Listing(e)),
            Err(e) => {
                warn!("Session listing at index {start} failed: {e}");
                break;
            }
        };

        let page = match spec::parse_page(&doc) {
            Ok(page) => page,
            Err(e) => {
                warn!("Session listing XML parse error at index {start}: {e}");
                break;
            }
        };
        if page.is_empty() {
            break;
        }

        let n = page.len();
        info!("Sessions {}–{} fetched.", start, start + n - 1);
        all.extend(page);

        if n < page_size {
            break;
        }
        start += page_size;
        opts.rate.pause(opts.rate.page);
    }

    Ok(all)
}
