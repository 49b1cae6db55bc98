//! Outbound link decoration
//!
//! Every sponsor click-through URL is tagged with a fixed set of UTM
//! parameters before navigation. Decoration is idempotent: a URL that
//! already carries the campaign parameters is returned unchanged, so
//! re-rendering a creative can never stack duplicates.

/// Fixed UTM query parameters appended to every target URL
pub const UTM_PARAMS: &str = "utm_source=sc&utm_medium=referral&utm_campaign=referral_advertisement";

/// Append the referral UTM parameters to a target URL
///
/// Uses `&` when the URL already has a query string, `?` otherwise.
pub fn decorate_target_url(url: &str) -> String {
    if url.contains(UTM_PARAMS) {
        return url.to_string();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, UTM_PARAMS)
}
