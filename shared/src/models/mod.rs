//! Domain models for KrishiMitra

mod msp;
mod recommendation;
mod soil;
mod weather;

pub use msp::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
