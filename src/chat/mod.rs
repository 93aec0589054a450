// SPDX-License-Identifier: MPL-2.0
//! Streaming chat with the career coach backend.
//!
//! One exchange is live at a time: the question travels as a query
//! parameter, the answer arrives as Server-Sent Events and is appended
//! fragment by fragment. [`session`] models the exchange lifecycle on
//! the UI side; [`stream`] owns the connection and decodes the wire
//! format into typed events.

pub mod session;
pub mod stream;

pub use session::{ChatPhase, ChatSession};
pub use stream::{stream_events, StreamEvent};
