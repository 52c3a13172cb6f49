use thiserror::Error;

use crate::urls::OriginalDocumentUrl;

/// Reported by the namespace rewriter when a namespace member cannot be
/// safely turned into an export binding, e.g. a conflicting export name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot rewrite `{namespaced_name}` as an export: {reason}")]
pub struct RewriteError {
    pub namespaced_name: String,
    pub reason: String,
}

/// Classification failure for a single document.
///
/// Every variant aborts conversion of the affected document only; the
/// surrounding pipeline carries on with the rest of the package.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The wrapper check could not resolve the URL of a referenced document.
    /// Never silently downgraded to "not a wrapper" - an unresolvable
    /// reference can mask a real structural problem.
    #[error("could not resolve a URL for referenced document `{url}`")]
    UnresolvedReference { url: OriginalDocumentUrl },

    /// The namespace rewriter refused a member. Surfaced unchanged: a
    /// document is either fully rewritten or its conversion fails.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    /// The upstream feature graph handed us something inconsistent, e.g. a
    /// script import whose payload document was never analyzed.
    #[error("malformed feature graph: {reason}")]
    InvalidFeatureGraph { reason: String },
}
