mod builders;
mod recording_transport;

pub use builders::{QueryBuilder, TYPE_A, TYPE_MX, TYPE_NS, TYPE_URI};
pub use recording_transport::RecordingTransport;
