use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::io::Read;

use super::{Codec, SerializationOptions, StreamCodec};
use crate::errors::CodecResult;
use crate::record::Record;

/// Wraps a streaming codec in gzip.
///
/// Encoding streams the inner codec's output through the compressor and
/// finishes the gzip member before returning. Decoding inflates the whole
/// payload, then hands it to the inner codec.
#[derive(Debug, Clone)]
pub struct GzipCodec<C> {
    inner: C,
    label: &'static str,
    level: Compression,
}

impl<C: StreamCodec> GzipCodec<C> {
    /// Create a new gzip wrapper reported under `label`
    pub fn new(inner: C, label: &'static str, options: &SerializationOptions) -> Self {
        Self {
            inner,
            label,
            level: Compression::new(options.compression_level),
        }
    }
}

impl<C: StreamCodec> Codec for GzipCodec<C> {
    fn label(&self) -> &'static str {
        self.label
    }

    fn try_encode(&self, record: &Record) -> CodecResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        self.inner.write_record(record, &mut encoder)?;
        Ok(encoder.finish()?)
    }

    fn try_decode(&self, data: &[u8]) -> CodecResult<Record> {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        self.inner.try_decode(&decompressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{JsonCodec, MessagePackCodec};

    #[test]
    fn test_output_is_a_complete_gzip_member() {
        let codec = GzipCodec::new(MessagePackCodec, "binary+compressed", &SerializationOptions::default());
        let bytes = codec.encode(&Record::sample());

        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);

        let mut plain = Vec::new();
        GzDecoder::new(bytes.as_slice()).read_to_end(&mut plain).unwrap();
        assert_eq!(plain, MessagePackCodec.encode(&Record::sample()));
    }

    #[test]
    fn test_wraps_any_stream_codec() {
        let codec = GzipCodec::new(JsonCodec, "text+compressed", &SerializationOptions::default());
        let record = Record::sample();
        assert_eq!(codec.label(), "text+compressed");
        assert_eq!(codec.decode(&codec.encode(&record)), record);
    }

    #[test]
    fn test_truncated_stream_decodes_to_zero_record() {
        let codec = GzipCodec::new(MessagePackCodec, "binary+compressed", &SerializationOptions::default());
        let bytes = codec.encode(&Record::sample());

        // header only, as left behind by a compressor that was never closed
        assert!(codec.try_decode(&bytes[..10]).is_err());
        assert_eq!(codec.decode(&bytes[..10]), Record::default());
    }

    #[test]
    fn test_level_zero_still_round_trips() {
        let codec = GzipCodec::new(MessagePackCodec, "binary+compressed", &SerializationOptions::stored());
        let record = Record::new("a", "b", ["c"]);
        assert_eq!(codec.decode(&codec.encode(&record)), record);
    }
}
