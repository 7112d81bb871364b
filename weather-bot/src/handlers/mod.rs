//! Handler implementations for the dispatch chain: command routing first,
//! then free-text city lookups.

mod city;
mod commands;

pub use city::CityHandler;
pub use commands::CommandHandler;
