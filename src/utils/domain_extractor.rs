//! Domain extraction from visited links.
//!
//! A link's domain is its authority (`host[:port]`) exactly as submitted,
//! with userinfo dropped and one leading `www.` label removed. Scheme, path,
//! query and fragment are ignored. Case and non-ASCII characters are kept,
//! so `WWW.Example.com` and `яндекс.рф` come back unchanged.

use std::collections::BTreeSet;

/// Prefix removed from hosts before they are reported as domains.
const WWW_PREFIX: &str = "www.";

/// Errors that can occur while extracting a domain from a link.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainExtractionError {
    #[error("Link has no '//' authority section")]
    MissingAuthority,

    #[error("URL has no host component")]
    MissingHost,
}

/// Extracts the domain of a single link.
///
/// An optional `scheme:` prefix is skipped, then the authority is read from
/// the `//` that must follow (a bare leading `//` also works). The authority
/// ends at the first `/`, `?` or `#`. The `www.` check is a literal,
/// case-sensitive prefix match.
///
/// # Errors
///
/// Returns [`DomainExtractionError::MissingAuthority`] if the link has no
/// `//` section (e.g. `example.com/path` or `mailto:` links), and
/// [`DomainExtractionError::MissingHost`] if that section is empty.
///
/// # Examples
///
/// ```
/// use visited_domains::utils::domain_extractor::extract_domain;
///
/// assert_eq!(extract_domain("https://www.stackoverflow.com/").unwrap(), "stackoverflow.com");
/// assert_eq!(extract_domain("https://vk.com/feed").unwrap(), "vk.com");
/// assert_eq!(extract_domain("http://a.com:8080/x").unwrap(), "a.com:8080");
/// ```
pub fn extract_domain(link: &str) -> Result<String, DomainExtractionError> {
    let authority = skip_scheme(link.trim())
        .strip_prefix("//")
        .ok_or(DomainExtractionError::MissingAuthority)?;

    let authority = authority
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host)| host);

    if host.is_empty() {
        return Err(DomainExtractionError::MissingHost);
    }

    let domain = host.strip_prefix(WWW_PREFIX).unwrap_or(host);

    Ok(domain.to_string())
}

/// Returns the link without its `scheme:` prefix, or unchanged when the
/// text before the first `:` is not a valid scheme name.
fn skip_scheme(link: &str) -> &str {
    match link.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => link,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();

    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Extracts a domain, degrading to an empty string when the link has no
/// usable host. A single bad link never fails the whole query.
pub fn domain_or_empty(link: &str) -> String {
    match extract_domain(link) {
        Ok(domain) => domain,
        Err(e) => {
            tracing::debug!(link = %link, error = %e, "Link has no usable host");
            String::new()
        }
    }
}

/// Normalizes every link to its domain and deduplicates the result.
pub fn distinct_domains<I, S>(links: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    links
        .into_iter()
        .map(|link| domain_or_empty(link.as_ref()))
        .collect()
}
