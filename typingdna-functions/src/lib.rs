// Conditional-auth functions for the TypingDNA behavioral-biometrics APIs.

pub mod client;
pub mod constants;
pub mod error;
pub mod function;
pub mod identity;
pub mod pattern;
pub mod save;
pub mod settings;
pub mod verify;

pub use client::*;
pub use error::*;
pub use function::*;
pub use identity::*;
pub use pattern::*;
pub use save::*;
pub use settings::*;
pub use verify::*;
