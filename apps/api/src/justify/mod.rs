// Text justification: pure line-filling in `justifier`, HTTP glue in `handlers`.
// Justifying a full request body is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod justifier;

pub use justifier::{count_words, justify, DEFAULT_LINE_WIDTH};
