/// Configuration options for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationOptions {
    /// Compression level (0-9, where 9 is highest compression)
    pub compression_level: u32,
}

impl SerializationOptions {
    /// Gzip's conventional default level
    pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

    /// Create new serialization options
    pub fn new(compression_level: u32) -> Self {
        Self {
            compression_level: compression_level.min(9),
        }
    }

    /// Deflate blocks are stored uncompressed
    pub fn stored() -> Self {
        Self::new(0)
    }

    /// Set the compression level
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }
}

impl Default for SerializationOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COMPRESSION_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(SerializationOptions::new(42).compression_level, 9);
        assert_eq!(
            SerializationOptions::default()
                .with_compression_level(12)
                .compression_level,
            9
        );
        assert_eq!(SerializationOptions::default().compression_level, 6);
    }
}
