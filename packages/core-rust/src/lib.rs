//! Support Core — key recasing, operation catalog, and JSON 1.1 request descriptors.

pub mod error;
pub mod operation;
pub mod recase;
pub mod request;
pub mod value;

pub use error::{RecaseError, RequestError, UnknownOperation, ValueError};
pub use operation::Operation;
pub use recase::{recase, recase_key, Case};
pub use request::{build_request, JsonTarget, RequestDescriptor, AWS_SUPPORT};
pub use value::Value;
