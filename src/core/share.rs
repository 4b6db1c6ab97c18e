//! Share tokens: a prompt's content as base64-encoded JSON, carried in the
//! fragment of a link (`<base>#/share/<token>`).
//!
//! Tokens never include the record id or creation time, so identical content
//! always produces the identical token.

use super::model::{PromptRecord, SharedView};
use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose};
use base64::Engine as _;
use url::Url;

const SHARE_ROUTE: &str = "/share/";

/// Standard alphabet, but `=` padding is optional when decoding. Links pasted
/// through chat clients often lose their trailing `=`.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes the shareable part of `record`.
pub fn encode(record: &PromptRecord) -> String {
    encode_view(&SharedView::from(record))
}

fn encode_view(view: &SharedView) -> String {
    // A struct of strings and a unit enum always serializes.
    let json = serde_json::to_vec(view).unwrap_or_default();
    general_purpose::STANDARD.encode(json)
}

/// Reverses [`encode`]. Whitespace and missing padding are tolerated; any
/// other malformed token yields `None`.
pub fn decode(token: &str) -> Option<SharedView> {
    let compact: String = token.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = match LENIENT.decode(compact) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode shared data");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(view) => Some(view),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode shared data");
            None
        }
    }
}

/// Builds the full share link for `token` on top of `base_url`.
pub fn share_link(base_url: &str, token: &str) -> Result<String, String> {
    let mut url =
        Url::parse(base_url).map_err(|e| format!("Invalid share base URL '{}': {}", base_url, e))?;
    url.set_fragment(Some(&format!("{}{}", SHARE_ROUTE, token)));
    Ok(url.into())
}

/// Pulls the token out of a share link, a bare `#/share/<token>` fragment or
/// a bare token.
pub fn extract_token(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(input) {
        return url.fragment().and_then(token_from_fragment);
    }

    let fragment = input.strip_prefix('#').unwrap_or(input);
    if fragment.starts_with('/') {
        return token_from_fragment(fragment);
    }
    Some(fragment.to_string())
}

fn token_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .strip_prefix(SHARE_ROUTE)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
