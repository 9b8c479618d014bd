use tokio::io::{AsyncRead, AsyncReadExt};

/// Fixed capacity for one header line, terminator excluded.
pub const MAX_LINE_BYTES: usize = 4096;

/// One attempt to pull a header line off the connection.
#[derive(Debug)]
pub enum LineOutcome {
    /// A non-empty header line, with CR and LF already stripped.
    Line(String),
    /// The empty line that terminates the header block.
    EndOfHeaders,
    /// The line could not be read; the connection is unusable.
    Failed(ReadFailure),
}

#[derive(Debug)]
pub enum ReadFailure {
    /// Peer closed the stream before a line feed was seen.
    Closed,
    /// The line would not fit in `MAX_LINE_BYTES`.
    TooLong,
    /// Unrecoverable read error.
    Io(std::io::Error),
}

/// Reads a single newline-terminated line, one byte at a time.
///
/// The terminating `\n` is consumed but not stored, and `\r` is dropped
/// wherever it appears. An interrupted read is retried transparently and
/// never surfaces as a failure.
pub async fn read_header_line<R>(reader: &mut R) -> LineOutcome
where
    R: AsyncRead + Unpin,
{
    let mut line: Vec<u8> = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        match reader.read(&mut byte).await {
            Ok(0) => return LineOutcome::Failed(ReadFailure::Closed),
            Ok(_) => match byte[0] {
                b'\n' => {
                    if line.is_empty() {
                        return LineOutcome::EndOfHeaders;
                    }
                    return LineOutcome::Line(String::from_utf8_lossy(&line).into_owned());
                }
                b'\r' => {}
                c => {
                    if line.len() == MAX_LINE_BYTES {
                        return LineOutcome::Failed(ReadFailure::TooLong);
                    }
                    line.push(c);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return LineOutcome::Failed(ReadFailure::Io(e)),
        }
    }
}
