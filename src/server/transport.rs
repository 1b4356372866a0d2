//! Line-delimited stdio transport
//!
//! One JSON request per input line, one JSON response per output line.
//! Each response is flushed before the next line is read.

use std::io::{self, BufRead, BufWriter, Write};

use crate::protocol::{JsonRpcError, JsonRpcRequest, Response};
use crate::types::McpResult;

use super::McpServer;

impl McpServer {
    /// Run the server on stdin/stdout until end of input (blocking)
    pub fn run(&self) -> McpResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), BufWriter::new(stdout.lock()))
    }

    /// Serve requests from `reader`, writing responses to `writer`.
    ///
    /// Returns on end of input, or with the first I/O error.
    pub fn serve<R, W>(&self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            if let Some(response) = self.handle_line(&line) {
                write_response(&mut writer, &response)?;
            }
            line.clear();
        }
        tracing::debug!("input closed, shutting down");
        Ok(())
    }

    /// Handle one raw input line. Blank lines produce no response.
    pub fn handle_line(&self, line: &[u8]) -> Option<Response> {
        if line.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        let request: JsonRpcRequest = match serde_json::from_slice(line) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse request");
                return Some(JsonRpcError::parse_error(e.to_string()).into());
            }
        };

        Some(self.handle_request(request))
    }
}

/// Write one response line and flush it
fn write_response<W: Write>(writer: &mut W, response: &Response) -> McpResult<()> {
    let json = serde_json::to_string(response)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
