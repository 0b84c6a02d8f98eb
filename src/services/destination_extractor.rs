use serde_json::Value;

const DESTINATIONS_MARKER: &str = r#""popular_destinations":"#;
const DESTINATIONS_KEY: &str = "popular_destinations";

// Closing pattern of the destinations array inside the script payload:
// last prices array, enclosing destination object, outer array.
const ARRAY_END: &str = "]}]";

pub enum DestinationPayload {
    Entries(Vec<Value>),
    MarkerMissing,
    Malformed,
}

/// Locates the embedded destinations payload in raw page source and parses
/// it. Both failure variants mean "no data this run" and are recoverable;
/// the caller decides nothing beyond treating them as an empty batch.
pub fn extract_destination_entries(page_source: &str) -> DestinationPayload {
    if !page_source.contains(DESTINATIONS_MARKER) {
        log::warn!("No popular destinations data found in the page source");
        return DestinationPayload::MarkerMissing;
    }

    let Some(fragment) = isolate_fragment(page_source) else {
        log::error!("Could not find the end of the destinations array");
        return DestinationPayload::Malformed;
    };

    let document = fragment_to_document(fragment);

    match serde_json::from_str::<Value>(&document) {
        Ok(mut parsed) => match parsed.get_mut(DESTINATIONS_KEY).map(Value::take) {
            Some(Value::Array(entries)) => {
                log::info!("Found {} destination entries", entries.len());
                DestinationPayload::Entries(entries)
            }
            _ => {
                log::error!("Destinations payload is not an array");
                DestinationPayload::Malformed
            }
        },
        Err(e) => {
            log::error!("Error parsing destinations payload: {:?}", e);
            DestinationPayload::Malformed
        }
    }
}

// Substring from the marker through the closing pattern, inclusive. The
// scan is anchored on fixed literals, not a brace balancer; if the page
// structure shifts this returns None rather than scanning forever.
fn isolate_fragment(page_source: &str) -> Option<&str> {
    let start = page_source.find(DESTINATIONS_MARKER)?;
    let tail = &page_source[start..];
    let end = tail.find(ARRAY_END)?;

    Some(&tail[..end + ARRAY_END.len()])
}

// The fragment is an object member (`"key": [...]`), not a standalone
// document; wrap it in braces so it parses.
fn fragment_to_document(fragment: &str) -> String {
    format!("{{{}}}", fragment)
}
