use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tracing::info;

use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::resolve;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One client connection, owned exclusively by its handler task for its
/// entire lifetime. Dropping it closes the socket on every exit path.
pub struct Connection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    root: PathBuf,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root: PathBuf) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            root,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request-response cycle. There is
    /// no keep-alive: the machine runs `Reading` → `Resolving` → `Writing`
    /// → `Closed` once and the connection is closed whichever way it exits.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Resolving(req);
                        }
                        None => {
                            // Peer went away before sending a full request;
                            // no response is owed.
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Resolving(req) => {
                    let outcome = resolve::resolve(&self.root, &req).await;
                    let writer = ResponseWriter::new(Response::from_outcome(outcome));
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(response) => {
                    response.write_to_stream(&mut self.writer).await?;

                    // Output side first, then input and socket on drop.
                    self.writer.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request line and the header lines that follow it, up to
    /// the first zero-length line. Returns `None` if the stream ends before
    /// the request is complete.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let request_line = match self.read_line().await? {
            Some(line) => line,
            None => return Ok(None),
        };
        info!("{}", request_line);

        let mut request = parse_request_line(&request_line)
            .map_err(|e| anyhow::anyhow!("malformed request line: {:?}", e))?;

        loop {
            match self.read_line().await? {
                None => return Ok(None),
                Some(line) if line.is_empty() => break,
                Some(line) => {
                    info!("{}", line);
                    request.headers.push(line);
                }
            }
        }

        Ok(Some(request))
    }

    /// Reads one line, accepting CRLF or bare LF endings, with the
    /// terminator stripped. `None` means the stream hit EOF first.
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).await?;
        if n == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}
