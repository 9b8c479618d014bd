use anyhow::Result;
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Product token carried in the `Server` header of every response.
pub const SERVER_TOKEN: &str = concat!("staticd/", env!("CARGO_PKG_VERSION"));

/// Chunk size for streaming file bodies.
const STREAM_BUF_BYTES: usize = 8192;

/// Serializes the status line and the fixed header block.
///
/// Header order is fixed so identical requests produce byte-identical
/// responses. Every response closes the connection; keep-alive is never
/// offered.
fn serialize_head(resp: &Response) -> Vec<u8> {
    format!(
        "{} {} {}\r\n\
         Server: {}\r\n\
         Connection: close\r\n\
         Content-Type: {}\r\n\
         Content-Length: {}\r\n\
         \r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        SERVER_TOKEN,
        resp.content_type,
        resp.content_length,
    )
    .into_bytes()
}

/// Writes the head and then the body to the client.
///
/// A write failure anywhere aborts the response; the caller closes the
/// connection and nothing is retried.
pub async fn write_response<W>(out: &mut W, resp: Response) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    info!(
        status = resp.status.as_u16(),
        mime = resp.content_type,
        content_length = resp.content_length,
        "RESPONSE"
    );

    out.write_all(&serialize_head(&resp)).await?;

    match resp.body {
        Body::Page(page) => out.write_all(&page).await?,
        Body::File(mut file) => {
            let mut buf = BytesMut::with_capacity(STREAM_BUF_BYTES);
            loop {
                buf.clear();
                let n = file.read_buf(&mut buf).await?;
                if n == 0 {
                    break;
                }
                out.write_all(&buf).await?;
            }
        }
    }
    out.flush().await?;

    Ok(())
}
