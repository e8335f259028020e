#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

mod controller;
pub use controller::*;
mod display;
pub use display::*;
mod indicator;
pub use indicator::*;
mod input;
pub use input::*;
mod signal;
pub use signal::*;
mod text;
pub use text::*;
mod timing;
pub use timing::*;

#[cfg(feature = "firmware")]
pub mod board;
