use prost::Message;

use super::Codec;
use crate::errors::CodecResult;
use crate::proto;
use crate::record::Record;

/// Schema-compiled strategy: the record is mapped onto `proto::Entity` and
/// written with Protobuf's tag-based wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

impl Codec for ProtobufCodec {
    fn label(&self) -> &'static str {
        "schema-binary"
    }

    fn try_encode(&self, record: &Record) -> CodecResult<Vec<u8>> {
        let message = proto::Entity::from(record);
        let mut buf = Vec::with_capacity(message.encoded_len());
        message.encode(&mut buf)?;
        Ok(buf)
    }

    fn try_decode(&self, data: &[u8]) -> CodecResult<Record> {
        Ok(proto::Entity::decode(data)?.into())
    }
}
