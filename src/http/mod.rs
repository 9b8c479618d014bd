//! HTTP protocol implementation.
//!
//! One connection is served end to end by a short pipeline, each stage
//! invoked once per connection and holding no state across connections:
//!
//! ```text
//! connection ── line ── parser ── mapper ── response ── writer
//! ```
//!
//! - **`connection`**: per-connection worker driving the whole exchange
//! - **`line`**: pulls newline-terminated header lines off the stream
//! - **`parser`**: classifies each header line, extracting the GET path
//! - **`mapper`**: rewrites the URL path into a root-relative filename
//! - **`mime`**: content-type lookup from the filename suffix
//! - **`response`**: response representation and document-root lookup
//! - **`writer`**: serializes the head and streams the body to the client

pub mod connection;
pub mod line;
pub mod mapper;
pub mod mime;
pub mod parser;
pub mod response;
pub mod writer;
