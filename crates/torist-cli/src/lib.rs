//! Library side of the `torist` command: logging setup, report building
//! and terminal rendering.

pub mod logging;
pub mod render;
pub mod report;
