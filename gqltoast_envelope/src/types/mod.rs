mod envelope;
pub use self::envelope::ErrorEnvelope;

mod network;
pub use self::network::NetworkFailure;

mod graph_error;
pub use self::graph_error::{GraphError, Location, PathSegment};
