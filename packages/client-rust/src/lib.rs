//! Support Client — typed wrappers for every AWS Support operation, client
//! configuration, and the transport seam.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod transport;

pub use client::SupportClient;
pub use config::ClientConfig;
pub use error::{ClientError, LoggingError, TransportError};
pub use logging::init_logging;
pub use operations::Attachment;
pub use transport::Transport;
