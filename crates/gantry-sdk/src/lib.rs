pub mod core;
pub mod errors;

pub mod logging;
pub mod querybuilder;
pub mod value;

mod client;
mod gen;

pub use crate::core::config::Config;
pub use crate::core::connect_params::ConnectParams;

pub use client::*;
pub use gen::*;
