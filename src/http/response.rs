use std::path::Path;

use anyhow::Result;
use tokio::fs::File;

use crate::http::mime;

/// Status codes this server can put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Where the response body comes from.
pub enum Body {
    /// An open file, streamed verbatim.
    File(File),
    /// An in-memory generated page.
    Page(Vec<u8>),
}

/// A response ready to be serialized: status, content type, and the exact
/// body length, all known before the first body byte is written.
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub content_length: u64,
    pub body: Body,
}

impl Response {
    /// Resolves a mapped filename against the document root and opens it
    /// for reading.
    ///
    /// A file that cannot be opened is reported to the client as 404,
    /// never as a server error.
    pub async fn for_path(doc_root: &Path, mapped: &str) -> Result<Self> {
        let full = doc_root.join(mapped.trim_start_matches('/'));
        let file = match File::open(&full).await {
            Ok(file) => file,
            Err(_) => return Ok(Self::not_found(mapped)),
        };

        // Size probe up front: Content-Length goes out before the body.
        let content_length = file.metadata().await?.len();

        Ok(Response {
            status: StatusCode::Ok,
            content_type: mime::resolve(mapped),
            content_length,
            body: Body::File(file),
        })
    }

    /// A 404 response with a generated page naming the missing resource.
    pub fn not_found(mapped: &str) -> Self {
        let page = format!(
            "<html>\n<body>\n<h1>404 Not Found</h1>\n{mapped} is not found\n</body></html>\n"
        );

        Response {
            status: StatusCode::NotFound,
            content_type: "text/html",
            content_length: page.len() as u64,
            body: Body::Page(page.into_bytes()),
        }
    }
}
