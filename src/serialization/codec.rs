use std::io::Write;

use crate::errors::CodecResult;
use crate::record::Record;

/// One serialization strategy: an encode/decode pair plus the label it is
/// reported under.
///
/// Implementors only write the fallible `try_*` halves. The provided
/// [`Codec::encode`] and [`Codec::decode`] never fail: an error becomes an
/// empty byte vector or the zero [`Record`], so the timing loop needs no
/// error branch.
pub trait Codec {
    /// Label shown in the report line
    fn label(&self) -> &'static str;

    /// Serialize a record
    fn try_encode(&self, record: &Record) -> CodecResult<Vec<u8>>;

    /// Deserialize a record
    fn try_decode(&self, data: &[u8]) -> CodecResult<Record>;

    /// Serialize a record, yielding no bytes on failure
    fn encode(&self, record: &Record) -> Vec<u8> {
        match self.try_encode(record) {
            Ok(bytes) => {
                log::trace!("{} payload: {}", self.label(), hex::encode(&bytes));
                bytes
            }
            Err(e) => {
                log::debug!("{} encode failed: {e}", self.label());
                Vec::new()
            }
        }
    }

    /// Deserialize a record, yielding the zero record on failure
    fn decode(&self, data: &[u8]) -> Record {
        self.try_decode(data).unwrap_or_else(|e| {
            log::debug!("{} decode failed: {e}", self.label());
            Record::default()
        })
    }
}

/// A codec that can write straight into a byte sink, so wrappers such as
/// [`super::GzipCodec`] can feed a compressor without an intermediate buffer.
pub trait StreamCodec: Codec {
    fn write_record<W: Write>(&self, record: &Record, writer: W) -> CodecResult<()>;
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn try_encode(&self, record: &Record) -> CodecResult<Vec<u8>> {
        (**self).try_encode(record)
    }

    fn try_decode(&self, data: &[u8]) -> CodecResult<Record> {
        (**self).try_decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodecError;

    struct Broken;

    impl Codec for Broken {
        fn label(&self) -> &'static str {
            "broken"
        }

        fn try_encode(&self, _record: &Record) -> CodecResult<Vec<u8>> {
            Err(CodecError::SerializationError("always".to_string()))
        }

        fn try_decode(&self, _data: &[u8]) -> CodecResult<Record> {
            Err(CodecError::DeserializationError("always".to_string()))
        }
    }

    #[test]
    fn test_failures_are_swallowed() {
        let codec = Broken;
        assert!(codec.encode(&Record::sample()).is_empty());
        assert_eq!(codec.decode(b"anything"), Record::default());
    }

    #[test]
    fn test_boxed_codec_delegates() {
        let codec: Box<dyn Codec> = Box::new(Broken);
        assert_eq!(codec.label(), "broken");
        assert!(codec.encode(&Record::sample()).is_empty());
    }
}
