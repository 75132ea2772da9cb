//! Authentication schemes and the credential wrapper they share.

pub mod scheme;
pub mod secret;

pub use scheme::*;
pub use secret::*;
