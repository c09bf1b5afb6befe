//! Outlook API response normalization
//!
//! Converts Outlook API messages to snapshot domain models.

use chrono::{DateTime, Utc};
use log::warn;

use super::api::{ItemBody, OutlookMessage};
use crate::error::FetchError;
use crate::models::{Message, Timestamp};

/// Column width used when rendering HTML bodies as text
const TEXT_WIDTH: usize = 130;

/// Marker for the start of a quoted reply chain
const QUOTE_MARKER: &str = "From";

/// Normalize an Outlook API message into a snapshot Message
pub fn normalize_message(msg: OutlookMessage, sequence_number: usize) -> Result<Message, FetchError> {
    let timestamp = parse_received(&msg.received_date_time)?;

    let to: Vec<String> = msg
        .to_recipients
        .into_iter()
        .map(|r| r.email_address.address)
        .collect();

    let mut builder = Message::builder(sequence_number, msg.parent_folder_id, timestamp)
        .to(to)
        .subject(msg.subject.unwrap_or_default())
        .body(body_to_text(msg.body.as_ref()));

    // Unsent drafts have no sender; the builder fills in the placeholder
    if let Some(from) = msg.from {
        builder = builder.from(from.email_address.address);
    }

    Ok(builder.build())
}

/// Plain text for a message body.
///
/// Every body goes through the HTML renderer whatever its declared content
/// type, then everything from the first "From" onward is dropped to strip
/// quoted replies.
pub fn body_to_text(body: Option<&ItemBody>) -> String {
    let Some(body) = body else {
        return String::new();
    };

    let text = match html2text::from_read(body.content.as_bytes(), TEXT_WIDTH) {
        Ok(text) => text.trim_end_matches('\n').to_string(),
        Err(e) => {
            warn!("Failed to render body, keeping raw content: {}", e);
            body.content.clone()
        }
    };

    match text.find(QUOTE_MARKER) {
        Some(pos) => text[..pos].to_string(),
        None => text,
    }
}

/// Parse `ReceivedDateTime`, accepting RFC 3339 offsets as well as the bare
/// `YYYY-MM-DDTHH:MM:SSZ` form
fn parse_received(value: &str) -> Result<Timestamp, FetchError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(Timestamp::from(dt.with_timezone(&Utc)));
    }
    value
        .parse()
        .map_err(|e| FetchError::Decode(format!("ReceivedDateTime: {}", e)))
}
