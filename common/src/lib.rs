//! # Sweepr Common
//!
//! Models, configuration, error types and the transport seam shared by the
//! scanner core and the command line front-end.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod transport;

#[doc(hidden)]
pub use tracing as __tracing;
