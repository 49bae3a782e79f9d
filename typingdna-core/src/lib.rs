// Host-framework contracts consumed by the TypingDNA conditional-auth functions.

pub mod config;
pub mod context;
pub mod tenant;

pub use config::*;
pub use context::*;
pub use tenant::*;
