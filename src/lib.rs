//! Codec Shootout - single-sample encode/decode timing for one record
//!
//! Four strategies are compared: JSON, named-field MessagePack, gzipped
//! MessagePack and Protobuf. Every adapter exposes the same no-raise
//! [`serialization::Codec`] surface, and [`bench::run`] times each one
//! exactly once.

pub mod bench;
pub mod config;
pub mod errors;
pub mod proto;
pub mod record;
pub mod serialization;

// Re-export commonly used types
pub use bench::{measure, run, verify, Measurement};
pub use config::BenchConfig;
pub use errors::{CodecError, CodecResult};
pub use record::Record;
pub use serialization::{Codec, SerializationFormat, SerializationOptions};
