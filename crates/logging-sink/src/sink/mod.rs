//! crates/logging-sink/src/sink/mod.rs
//! Line-oriented sink and its rendering helpers.

mod message_sink;
mod render;

pub use message_sink::MessageSink;
pub use render::{join_values, render_values};
