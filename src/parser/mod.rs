//! HTTP request decoder.
//!
//! Turns the raw bytes of a single read into an [`HttpRequest`]. Decoding is a
//! pure function of its input: no I/O, no state kept between calls.

mod request;
mod method;
mod error;
mod tests;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
