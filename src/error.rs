use thiserror::Error;

/// Request-level failures. Every variant renders as a localized
/// not-found page; none of them is surfaced to the visitor verbatim.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    /// A supported locale has no message mapping. This is a packaging
    /// defect: the registry and the message files are out of sync.
    #[error("no messages loaded for locale '{0}'")]
    MessagesNotFound(&'static str),

    #[error("no page at '{0}'")]
    PageNotFound(String),
}
