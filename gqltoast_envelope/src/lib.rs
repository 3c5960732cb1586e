mod errors;
pub mod types;
pub use self::errors::Error;
pub use self::types::{ErrorEnvelope, GraphError, Location, NetworkFailure, PathSegment};
