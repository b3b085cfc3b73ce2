use super::{Codec, GzipCodec, JsonCodec, MessagePackCodec, ProtobufCodec, SerializationOptions};

/// The strategies the benchmark knows about, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializationFormat {
    /// Text-structured JSON
    Json,
    /// Self-describing binary (MessagePack with named fields)
    MessagePack,
    /// MessagePack inside a gzip stream
    MessagePackGzip,
    /// Schema-compiled binary (Protobuf)
    Protobuf,
}

impl SerializationFormat {
    /// Every format, in the order they are reported
    pub const ALL: [SerializationFormat; 4] = [
        SerializationFormat::Json,
        SerializationFormat::MessagePack,
        SerializationFormat::MessagePackGzip,
        SerializationFormat::Protobuf,
    ];

    /// Label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            SerializationFormat::Json => "text",
            SerializationFormat::MessagePack => "binary",
            SerializationFormat::MessagePackGzip => "binary+compressed",
            SerializationFormat::Protobuf => "schema-binary",
        }
    }

    /// Build the adapter for this format
    pub fn codec(&self, options: &SerializationOptions) -> Box<dyn Codec> {
        match self {
            SerializationFormat::Json => Box::new(JsonCodec),
            SerializationFormat::MessagePack => Box::new(MessagePackCodec),
            SerializationFormat::MessagePackGzip => {
                Box::new(GzipCodec::new(MessagePackCodec, self.label(), options))
            }
            SerializationFormat::Protobuf => Box::new(ProtobufCodec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_labels_match_format_labels() {
        let options = SerializationOptions::default();
        for format in SerializationFormat::ALL {
            assert_eq!(format.codec(&options).label(), format.label());
        }
    }
}
