//! Scanner configuration errors.

/// Errors reported while configuring a scanner
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A default token must carry classification data.
    #[error("the default return token must carry data, got {kind} token")]
    DefaultTokenWithoutData {
        /// The kind of the rejected token.
        kind: &'static str,
    },
}
