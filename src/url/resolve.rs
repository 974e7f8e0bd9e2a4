use url::Url;

/// Where a followable href points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A fragment-only href: an anchor on the page it was found on
    SamePage,

    /// An absolute http(s) URL
    Absolute(String),
}

/// Resolves a link href against the page it was found on
///
/// Returns None if the link cannot be followed:
/// - empty or whitespace-only hrefs
/// - javascript:, mailto:, tel: and data: targets
/// - hrefs that do not join into an http(s) URL
///
/// Fragment-only hrefs (`#`, `#comments`) resolve to [`LinkTarget::SamePage`]
/// so the caller can decide what "this page" means. Absolute targets are not
/// normalized; only the join against `base_url` is applied.
///
/// # Examples
///
/// ```
/// use homebrew_scraper::url::{resolve_link, LinkTarget};
/// use url::Url;
///
/// let base = Url::parse("https://example.com/recipes/page/1").unwrap();
/// assert_eq!(
///     resolve_link("2", &base),
///     Some(LinkTarget::Absolute("https://example.com/recipes/page/2".to_string()))
/// );
/// assert_eq!(resolve_link("#top", &base), Some(LinkTarget::SamePage));
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<LinkTarget> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if href.starts_with('#') {
        return Some(LinkTarget::SamePage);
    }

    let lowered = href.to_ascii_lowercase();
    if ["javascript:", "mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    match absolute.scheme() {
        "http" | "https" => Some(LinkTarget::Absolute(absolute.into())),
        _ => None,
    }
}
