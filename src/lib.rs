#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{AiPlayer, Player};
#[cfg(feature = "std")]
pub use player::CliPlayer;
