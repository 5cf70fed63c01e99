//! API endpoint implementations

pub mod public;
pub mod signed;

pub use public::{PublicEndpoint, PublicEndpoints};
pub use signed::{ApiScope, SignedEndpoints};

/// Join a base URL and path segments with `/`
///
/// Segments are appended verbatim. A trailing `/` on the base is dropped so
/// that configured bases with or without one produce the same URL.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let base = base.trim_end_matches('/');
    let mut url = String::with_capacity(
        base.len() + segments.iter().map(|s| s.len() + 1).sum::<usize>(),
    );
    url.push_str(base);

    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }

    url
}
