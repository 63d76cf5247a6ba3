//! Error types for resource resolution.
//!
//! Parse failures never appear here: an unparseable URI is the
//! [`ResourceLocator::Invalid`](crate::ResourceLocator::Invalid) *value*,
//! not an error. Everything in this module belongs to the resolve side of
//! the contract.

use std::fmt;

/// Opaque failure reported by a remote API call.
///
/// The resolver passes these through unmodified: no retries, no status-code
/// interpretation. Policies such as "treat 404 as an empty list" belong to
/// the listing collaborators that call the remote API directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    /// HTTP-style status code reported by the remote.
    pub status: u16,
    /// Raw response body, kept verbatim for diagnostics.
    pub body: String,
}

impl RemoteFailure {
    /// Creates a new remote failure.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true if the remote reported a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remote call failed with status {}: {}", self.status, self.body)
    }
}

impl std::error::Error for RemoteFailure {}

/// Errors that can occur while resolving a locator into document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The locator was `Invalid`; nothing can be fetched for it.
    UnsupportedResource {
        /// The original URI text carried by the invalid locator
        uri: String,
    },
    /// No usable access token for the active account, or no active account.
    MissingCredential {
        /// The account the token was looked up for, when one was active
        aid: Option<u64>,
    },
    /// A collaborator does not support an edit/update for this locator kind.
    UnsupportedOperation {
        /// The locator kind the operation was attempted on
        kind: &'static str,
    },
    /// The remote call failed; passed through unmodified.
    Remote(RemoteFailure),
    /// The caller cancelled the resolution cooperatively.
    Cancelled,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedResource { uri } => {
                write!(f, "'{uri}' does not address a known resource shape")
            }
            Self::MissingCredential { aid } => match aid {
                Some(aid) => write!(
                    f,
                    "no access token available for account {aid}; sign in again to refresh it"
                ),
                None => write!(f, "no active account selected; choose an account first"),
            },
            Self::UnsupportedOperation { kind } => {
                write!(f, "'{kind}' resources do not support this operation")
            }
            Self::Remote(failure) => write!(f, "{failure}"),
            Self::Cancelled => write!(f, "resolution was cancelled"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Remote(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<RemoteFailure> for ResolveError {
    fn from(failure: RemoteFailure) -> Self {
        Self::Remote(failure)
    }
}

impl ResolveError {
    /// Creates an `UnsupportedResource` error.
    #[must_use]
    pub fn unsupported_resource(uri: impl Into<String>) -> Self {
        Self::UnsupportedResource { uri: uri.into() }
    }

    /// Creates a `MissingCredential` error.
    #[must_use]
    pub const fn missing_credential(aid: Option<u64>) -> Self {
        Self::MissingCredential { aid }
    }

    /// Creates an `UnsupportedOperation` error.
    #[must_use]
    pub const fn unsupported_operation(kind: &'static str) -> Self {
        Self::UnsupportedOperation { kind }
    }

    /// Returns true if this error means the URI shape was unparseable.
    #[must_use]
    pub const fn is_unsupported_resource(&self) -> bool {
        matches!(self, Self::UnsupportedResource { .. })
    }

    /// Returns true if this error means no usable credential was found.
    #[must_use]
    pub const fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }

    /// Returns true if the resolution was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
