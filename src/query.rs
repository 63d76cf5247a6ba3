//! Query-string parameters for lytics URIs.

use std::fmt;
use std::str::FromStr;

/// Parameters from a lytics URI query string.
///
/// Stores key-value pairs in the order they appear in the query string. The
/// same name may occur any number of times; repetition order is preserved,
/// which is what gives `function` locators their ordered `params` list.
///
/// Parsing is total: there is no malformed query string, only pairs that
/// decode to whatever text they carry. `%XX` escapes are decoded; anything
/// else passes through literally.
///
/// # Recognized Parameters
///
/// - `params`: repeatable positional argument for `function` resources
/// - `path`: workspace-relative draft path for content classification
/// - `active`: classify the active editor draft when `"true"`
///
/// # Examples
///
/// ```
/// use lytics_uri::QueryParams;
///
/// let query = QueryParams::parse("params=a&params=b&active=true");
/// assert_eq!(query.get("active"), Some("true"));
/// assert_eq!(query.all("params").collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses query parameters from a query string (without leading '?').
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut pairs = Vec::new();

        for pair in input.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (name, value) = match pair.find('=') {
                Some(eq_idx) => (&pair[..eq_idx], &pair[eq_idx + 1..]),
                None => (pair, ""),
            };

            pairs.push((Self::decode(name), Self::decode(value)));
        }

        Self { pairs }
    }

    /// Returns the first value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for a parameter, in query-string order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs, counting repetitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs in query-string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decodes `%XX` escapes; malformed escapes pass through unchanged.
    fn decode(input: &str) -> String {
        if !input.contains('%') {
            return input.to_string();
        }

        let bytes = input.as_bytes();
        let mut decoded = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'%'
                && i + 2 < bytes.len()
                && let (Some(hi), Some(lo)) =
                    (Self::hex_val(bytes[i + 1]), Self::hex_val(bytes[i + 2]))
            {
                decoded.push(hi * 16 + lo);
                i += 3;
                continue;
            }
            decoded.push(bytes[i]);
            i += 1;
        }

        String::from_utf8_lossy(&decoded).into_owned()
    }

    const fn hex_val(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{k}={v}")
                }
            })
            .collect();
        write!(f, "{}", pairs.join("&"))
    }
}

impl FromStr for QueryParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
