pub mod cli;
pub mod constants;
pub mod duration;
pub mod engine;
pub mod error;
pub mod export;
pub mod interrupt;
pub mod noise;
pub mod player;
pub mod sink;
mod util;

pub use error::{ArgumentError, DeviceError, Error};
