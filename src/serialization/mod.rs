pub mod codec;
pub mod formats;
pub mod gzip;
pub mod json;
pub mod msgpack;
pub mod options;
pub mod protobuf;

pub use codec::*;
pub use formats::*;
pub use gzip::*;
pub use json::*;
pub use msgpack::*;
pub use options::*;
pub use protobuf::*;
