use std::io::Write;

use super::{Codec, StreamCodec};
use crate::errors::CodecResult;
use crate::record::Record;

/// Binary self-describing strategy.
///
/// Records are written as MessagePack maps keyed by field name rather than
/// positional arrays, so the payload carries its own field layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePackCodec;

impl Codec for MessagePackCodec {
    fn label(&self) -> &'static str {
        "binary"
    }

    fn try_encode(&self, record: &Record) -> CodecResult<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(record)?)
    }

    fn try_decode(&self, data: &[u8]) -> CodecResult<Record> {
        Ok(rmp_serde::from_slice(data)?)
    }
}

impl StreamCodec for MessagePackCodec {
    fn write_record<W: Write>(&self, record: &Record, mut writer: W) -> CodecResult<()> {
        rmp_serde::encode::write_named(&mut writer, record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_embeds_field_names() {
        let bytes = MessagePackCodec.encode(&Record::sample());

        // fixmap with three entries
        assert_eq!(bytes[0], 0x83);
        for key in ["name", "details", "tags"] {
            assert!(bytes.windows(key.len()).any(|w| w == key.as_bytes()));
        }
    }

    #[test]
    fn test_streamed_output_matches_buffered() {
        let record = Record::sample();
        let mut streamed = Vec::new();
        MessagePackCodec.write_record(&record, &mut streamed).unwrap();
        assert_eq!(streamed, MessagePackCodec.encode(&record));
    }
}
