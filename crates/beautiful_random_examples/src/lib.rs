#![forbid(unsafe_code)]

mod blips;
mod rendering;

pub use blips::fade_blips;
pub use rendering::{init_tracing, Canvas};
