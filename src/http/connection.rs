use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpStream;
use tracing::{debug, error, info};

use crate::http::line::{self, LineOutcome};
use crate::http::mapper;
use crate::http::parser::{self, LineClass};
use crate::http::response::Response;
use crate::http::writer;

/// One accepted client connection, owned end to end by a single worker.
///
/// The endpoint strings are carried for diagnostics only. The stream is
/// closed when the worker finishes, on every exit path.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    local: SocketAddr,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, local: SocketAddr) -> Self {
        Self {
            stream,
            peer,
            local,
        }
    }

    /// Drives one connection end to end: reads header lines until the
    /// block ends or the read fails, then answers the captured request
    /// line, if any.
    ///
    /// A connection that never reaches the end of its header block with a
    /// request line captured — silence, a lone blank line, a malformed
    /// request line, a premature disconnect — gets no response at all,
    /// not even an error status. It is simply closed.
    pub async fn serve(mut self, doc_root: &Path) -> anyhow::Result<()> {
        info!(
            "Worker starting for client {} at server {}",
            self.peer, self.local
        );

        let mut mapped: Option<String> = None;
        let mut aborted = false;

        loop {
            match line::read_header_line(&mut self.stream).await {
                LineOutcome::EndOfHeaders => break,
                LineOutcome::Failed(reason) => {
                    debug!("Stopped reading headers from {}: {:?}", self.peer, reason);
                    aborted = true;
                    break;
                }
                LineOutcome::Line(text) => {
                    info!("HEADER: {}", text);
                    match parser::classify(&text) {
                        LineClass::Header => {}
                        LineClass::Invalid => {
                            error!("Invalid GET: {}", text);
                            break;
                        }
                        LineClass::RequestLine(path) => match mapper::map_url(&path) {
                            Some(filename) => {
                                info!("GET: url={} file={}", path, filename);
                                mapped = Some(filename);
                            }
                            None => {
                                error!("Invalid empty URL");
                                break;
                            }
                        },
                    }
                }
            }
        }

        // A dead stream never gets a response, even if a request line was
        // already captured.
        if !aborted {
            if let Some(filename) = mapped {
                let resp = Response::for_path(doc_root, &filename).await?;
                writer::write_response(&mut self.stream, resp).await?;
            }
        }

        info!("Worker exiting for client {}", self.peer);
        Ok(())
    }
}
