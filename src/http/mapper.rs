/// Rewrites a requested URL path into a document-root-relative filename.
///
/// Rules, applied in order and composed:
/// 1. the empty path cannot name a file;
/// 2. a path ending in `/` gets `index.html` appended;
/// 3. a leading `/images/` is exchanged for `/img/`, otherwise the path
///    is used verbatim.
///
/// Pure function over the path text; no filesystem access happens here.
/// Resolution against the document root is the response writer's job.
pub fn map_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let suffix = if url.ends_with('/') { "index.html" } else { "" };

    let (prefix, remainder) = match url.strip_prefix("/images/") {
        Some(stripped) => ("/img/", stripped),
        None => ("", url),
    };

    Some(format!("{prefix}{remainder}{suffix}"))
}
