use std::io::Write;

use super::{Codec, StreamCodec};
use crate::errors::{CodecError, CodecResult};
use crate::record::Record;

/// Text-structured strategy: JSON object keyed by field name
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn label(&self) -> &'static str {
        "text"
    }

    fn try_encode(&self, record: &Record) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(record).map_err(|e| CodecError::SerializationError(e.to_string()))
    }

    fn try_decode(&self, data: &[u8]) -> CodecResult<Record> {
        serde_json::from_slice(data).map_err(|e| CodecError::DeserializationError(e.to_string()))
    }
}

impl StreamCodec for JsonCodec {
    fn write_record<W: Write>(&self, record: &Record, writer: W) -> CodecResult<()> {
        serde_json::to_writer(writer, record)
            .map_err(|e| CodecError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_field_names_as_keys() {
        let bytes = JsonCodec.encode(&Record::sample());
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"name":"arham","details":"jain","tags":["97","male"]}"#);
    }

    #[test]
    fn test_missing_tags_is_an_error() {
        assert!(JsonCodec.try_decode(br#"{"name":"a","details":"b"}"#).is_err());
        assert_eq!(JsonCodec.decode(br#"{"name":"a","details":"b"}"#), Record::default());
    }
}
