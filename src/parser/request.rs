//! HTTP request decoding and representation.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::parser::error::Error;
use crate::parser::method::Method;

const CRLF: &[u8] = b"\r\n";
const HEADER_SEPARATOR: &str = ": ";
const USER_AGENT_PREFIX: &[u8] = b"User-Agent:";

/// A decoded HTTP request.
///
/// Built once per connection from the bytes of a single read and never
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, query string included
    pub path: String,
    /// The protocol version token, if the start line had one
    pub version: Option<String>,
    /// The HTTP headers, keyed by name exactly as received
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    raw: Vec<u8>,
}

impl HttpRequest {
    /// The method and path joined by a single space.
    pub fn start_line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Get a header value. Names are matched case-sensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Find the `User-Agent` value by scanning the raw request line by line.
    ///
    /// The first line starting with `User-Agent:` wins and its value is
    /// trimmed of surrounding whitespace. Lines end at `\n` with an optional
    /// trailing `\r`.
    pub fn user_agent(&self) -> Option<String> {
        self.raw
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .find_map(|line| line.strip_prefix(USER_AGENT_PREFIX))
            .map(|value| String::from_utf8_lossy(value).trim().to_string())
    }
}

/// Split off the first CRLF-terminated line.
///
/// Returns the line and the bytes following its CRLF, or the whole input and
/// `None` when no CRLF remains.
fn split_line(input: &[u8]) -> (&[u8], Option<&[u8]>) {
    match input.windows(CRLF.len()).position(|window| window == CRLF) {
        Some(end) => (&input[..end], Some(&input[end + CRLF.len()..])),
        None => (input, None),
    }
}

/// Insert a header, appending to the value of an earlier header with the same
/// name instead of replacing it.
fn append_header(headers: &mut HashMap<String, String>, line: &str) {
    if let Some((name, value)) = line.split_once(HEADER_SEPARATOR) {
        headers.entry(name.to_string()).or_default().push_str(value);
    }
}

/// Parse an HTTP request from a byte slice.
///
/// # Arguments
///
/// * `input` - The bytes of a single read; may be truncated
///
/// # Returns
///
/// The decoded request, or an error if the start line has no request target
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let (start_line, mut rest) = split_line(input);
    let start_line = String::from_utf8_lossy(start_line);

    // Tokens are separated by exactly one space; doubled spaces yield empty tokens
    let mut tokens = start_line.split(' ');
    let method = tokens.next().map(Method::from);
    let path = tokens.next().map(str::to_string);
    let version = tokens.next().map(str::to_string);
    let (Some(method), Some(path)) = (method, path) else {
        return Err(Error::MalformedRequestLine(start_line.into_owned()));
    };

    // Headers run until the first empty line; the body is whatever follows it
    let mut headers = HashMap::new();
    let mut body: &[u8] = &[];
    while let Some(remaining) = rest {
        let (line, next) = split_line(remaining);
        if line.is_empty() {
            body = next.unwrap_or_default();
            break;
        }

        let line: Cow<'_, str> = String::from_utf8_lossy(line);
        append_header(&mut headers, &line);
        rest = next;
    }

    Ok(HttpRequest {
        method,
        path,
        version,
        headers,
        body: body.to_vec(),
        raw: input.to_vec(),
    })
}
