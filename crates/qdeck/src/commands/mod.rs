pub mod check;
pub mod completion;
pub mod config;
pub mod export;
pub mod fmt;
pub mod new;
pub mod spec;
