use staticd::http::parser::{LineClass, classify};

#[test]
fn test_classify_request_line_extracts_path() {
    assert_eq!(
        classify("GET /index.html HTTP/1.1"),
        LineClass::RequestLine("/index.html".to_string())
    );
}

#[test]
fn test_classify_root_path() {
    assert_eq!(
        classify("GET / HTTP/1.1"),
        LineClass::RequestLine("/".to_string())
    );
}

#[test]
fn test_classify_path_with_query_string_kept_verbatim() {
    assert_eq!(
        classify("GET /search?q=rust HTTP/1.1"),
        LineClass::RequestLine("/search?q=rust".to_string())
    );
}

#[test]
fn test_classify_version_marker_prefix_is_enough() {
    // Anything starting with HTTP after the space is accepted.
    assert_eq!(
        classify("GET /a HTTP/1.0"),
        LineClass::RequestLine("/a".to_string())
    );
}

#[test]
fn test_classify_other_header_is_ignorable() {
    assert_eq!(classify("Host: example.com"), LineClass::Header);
    assert_eq!(classify("User-Agent: curl/8.0"), LineClass::Header);
}

#[test]
fn test_classify_other_method_is_ignorable_not_invalid() {
    // Non-GET request lines are indistinguishable from headers here.
    assert_eq!(classify("POST /api HTTP/1.1"), LineClass::Header);
    assert_eq!(classify("BADMETHOD /x HTTP/1.1"), LineClass::Header);
}

#[test]
fn test_classify_lowercase_verb_is_ignorable() {
    assert_eq!(classify("get / HTTP/1.1"), LineClass::Header);
}

#[test]
fn test_classify_bare_verb_is_ignorable() {
    // "GET " with nothing after it is not a request line.
    assert_eq!(classify("GET "), LineClass::Header);
    assert_eq!(classify("GET"), LineClass::Header);
}

#[test]
fn test_classify_missing_version_marker_is_invalid() {
    assert_eq!(classify("GET /index.html"), LineClass::Invalid);
}

#[test]
fn test_classify_wrong_version_marker_is_invalid() {
    assert_eq!(classify("GET /index.html FTP/1.1"), LineClass::Invalid);
}

#[test]
fn test_classify_double_space_yields_empty_path() {
    // The mapper rejects the empty path later; classification succeeds.
    assert_eq!(
        classify("GET  HTTP/1.1"),
        LineClass::RequestLine(String::new())
    );
}

#[test]
fn test_classify_is_stateless() {
    // Same line, same answer, regardless of what came before.
    assert_eq!(classify("Host: a"), LineClass::Header);
    assert_eq!(
        classify("GET /x HTTP/1.1"),
        LineClass::RequestLine("/x".to_string())
    );
    assert_eq!(classify("Host: a"), LineClass::Header);
}
