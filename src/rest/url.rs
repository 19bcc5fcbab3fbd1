//! URL assembly and query-string handling for resources.
//!
//! Resources build every request URL from [`UrlParts`]. Query strings are
//! handled as raw `key=value` pairs: removing or appending a parameter never
//! re-encodes the others, so pagination cursors survive byte-for-byte.
//!
//! # Example
//!
//! ```rust
//! use instagram_api::rest::UrlParts;
//!
//! let mut parts = UrlParts::parse("https://x/y?cursor=42&access_token=OLD").unwrap();
//! parts.remove_query_param("access_token");
//! assert_eq!(parts.to_url(), "https://x/y?cursor=42");
//! ```

use std::borrow::Cow;

/// Name of the query parameter carrying the access token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Name of the query parameter carrying the page size.
pub const COUNT_PARAM: &str = "count";

/// The components of an absolute `scheme://authority/path` URL.
///
/// Every component is kept exactly as written in the input: nothing is
/// lowercased, re-encoded or normalized, so [`UrlParts::to_url`] reproduces
/// the input unless a query parameter was edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlParts {
    /// The scheme, e.g. `https`.
    pub scheme: String,
    /// The `user:password` part of the authority, if any.
    pub userinfo: Option<String>,
    /// The host, e.g. `api.instagram.com` (IPv6 hosts keep their brackets).
    pub host: String,
    /// The port, when one is written in the URL.
    pub port: Option<u16>,
    /// The path; empty when the URL has none.
    pub path: String,
    /// The raw query string without the leading `?`, if any.
    pub query: Option<String>,
    /// The raw fragment without the leading `#`, if any.
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Parses an absolute URL into its parts.
    ///
    /// Returns `None` if the URL cannot be parsed, has no host, or is not
    /// written in the `scheme://authority` form.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        url::Url::parse(url).ok()?.host_str()?;

        let (scheme, rest) = url.split_once("://")?;
        let (rest, fragment) = split_off(rest, '#');
        let (rest, query) = split_off(rest, '?');
        let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
        let (userinfo, host_port) = match authority.rsplit_once('@') {
            Some((userinfo, host_port)) => (Some(userinfo.to_string()), host_port),
            None => (None, authority),
        };
        let (host, port) = split_port(host_port)?;

        Some(Self {
            scheme: scheme.to_string(),
            userinfo,
            host: host.to_string(),
            port,
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Assembles the parts back into an absolute URL.
    ///
    /// The `?` separator is omitted when the query is absent or empty.
    #[must_use]
    pub fn to_url(&self) -> String {
        let mut url = format!("{}://", self.scheme);
        if let Some(userinfo) = &self.userinfo {
            url.push_str(userinfo);
            url.push('@');
        }
        url.push_str(&self.host);
        if let Some(port) = self.port {
            url.push(':');
            url.push_str(&port.to_string());
        }
        url.push_str(&self.path);
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }

    /// Removes every occurrence of the named parameter from the query.
    ///
    /// The remaining pairs keep their original bytes and relative order.
    pub fn remove_query_param(&mut self, name: &str) {
        if let Some(query) = self.query.take() {
            let kept = pairs(&query)
                .filter(|pair| decoded_key(pair) != name)
                .collect::<Vec<_>>()
                .join("&");
            self.query = Some(kept).filter(|q| !q.is_empty());
        }
    }

    /// Appends `name=value` to the end of the query, URL-encoding the value.
    pub fn append_query_param(&mut self, name: &str, value: &str) {
        let pair = format!("{name}={}", urlencoding::encode(value));
        self.query = Some(match self.query.take().filter(|q| !q.is_empty()) {
            Some(query) => format!("{query}&{pair}"),
            None => pair,
        });
    }

    /// Inserts `name=value` at the front of the query, URL-encoding the value.
    pub fn prepend_query_param(&mut self, name: &str, value: &str) {
        let pair = format!("{name}={}", urlencoding::encode(value));
        self.query = Some(match self.query.take().filter(|q| !q.is_empty()) {
            Some(query) => format!("{pair}&{query}"),
            None => pair,
        });
    }

    /// Returns the decoded value of the first occurrence of a parameter.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        pairs(query).find(|pair| decoded_key(pair) == name).map(|pair| {
            let value = pair.split_once('=').map_or("", |(_, v)| v);
            decode_component(value).into_owned()
        })
    }
}

/// Replaces the value of any `access_token` parameter with `*****`.
///
/// Used before a URL is logged or stored in an error. Works on the raw string
/// so even URLs that do not parse are never logged with their token.
#[must_use]
pub fn redact_access_token(url: &str) -> String {
    let Some((base, rest)) = url.split_once('?') else {
        return url.to_string();
    };
    let (query, fragment) = rest
        .split_once('#')
        .map_or((rest, None), |(q, f)| (q, Some(f)));

    let redacted = query
        .split('&')
        .map(|pair| {
            if decoded_key(pair) == ACCESS_TOKEN_PARAM {
                format!("{ACCESS_TOKEN_PARAM}=*****")
            } else {
                pair.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    match fragment {
        Some(fragment) => format!("{base}?{redacted}#{fragment}"),
        None => format!("{base}?{redacted}"),
    }
}

fn split_off(text: &str, separator: char) -> (&str, Option<String>) {
    text.split_once(separator)
        .map_or((text, None), |(head, tail)| (head, Some(tail.to_string())))
}

fn split_port(host_port: &str) -> Option<(&str, Option<u16>)> {
    let (host, port) = if host_port.starts_with('[') {
        let end = host_port.find(']')? + 1;
        let (host, rest) = host_port.split_at(end);
        (host, rest.strip_prefix(':'))
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };
    let port = match port.filter(|p| !p.is_empty()) {
        Some(port) => Some(port.parse().ok()?),
        None => None,
    };
    Some((host, port))
}

fn pairs(query: &str) -> impl Iterator<Item = &str> {
    query.split('&').filter(|pair| !pair.is_empty())
}

fn decoded_key(pair: &str) -> Cow<'_, str> {
    let key = pair.split_once('=').map_or(pair, |(k, _)| k);
    decode_component(key)
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    let raw: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    let decoded = urlencoding::decode(&raw).map(Cow::into_owned).ok();
    decoded.map_or(raw, Cow::Owned)
}
