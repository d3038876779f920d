use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::files::FileHandler;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    handler: FileHandler,
}

enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(Response),
    Closed,
}

enum ReadOutcome {
    Request(Request),
    Malformed(ParseError),
    Disconnected,
}

impl Connection {
    pub fn new(stream: TcpStream, handler: FileHandler) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            handler,
        }
    }

    /// Drives the connection through Reading → Processing → Writing →
    /// Closed. Typed protocol errors are answered with error pages; only
    /// I/O failures propagate to the caller. The socket closes on drop on
    /// every exit path.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Request(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    ReadOutcome::Malformed(err) => {
                        let response = Response::error_page(Self::status_for(err));
                        self.state = ConnectionState::Writing(response);
                    }
                    ReadOutcome::Disconnected => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(req).await;
                    self.state = ConnectionState::Writing(response);
                }

                ConnectionState::Writing(response) => {
                    writer::send(&mut self.stream, response).await?;
                    // Every response carries Connection: close.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            match parser::parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Ok(ReadOutcome::Malformed(e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Peer closed before sending a complete request.
                return Ok(ReadOutcome::Disconnected);
            }
        }
    }

    fn status_for(err: ParseError) -> StatusCode {
        match err {
            ParseError::InvalidMethod => StatusCode::MethodNotAllowed,
            _ => StatusCode::BadRequest,
        }
    }
}
