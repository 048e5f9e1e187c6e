//! Pagination cursor codec
//!
//! Turns the store's continuation key into an opaque, URL-safe token and
//! back. The token is owned by the store abstraction: callers pass it through
//! untouched, and the core never looks inside the key beyond encode/decode.
//!
//! # Token format
//!
//! URL-safe base64 (no padding) over a versioned JSON envelope. The planner
//! stamps the scan direction into the envelope so a token cannot be replayed
//! against the opposite sort order.

mod codec;
mod errors;

pub use codec::{CursorCodec, CURSOR_VERSION};
pub use errors::{CursorError, CursorResult};
