use crate::serialization::{Codec, SerializationFormat, SerializationOptions};

/// Main configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Serialization configuration
    pub serialization: SerializationOptions,
    /// Strategies to measure, in report order
    pub formats: Vec<SerializationFormat>,
}

impl BenchConfig {
    /// Create a configuration covering every strategy
    pub fn new() -> Self {
        Self {
            serialization: SerializationOptions::default(),
            formats: SerializationFormat::ALL.to_vec(),
        }
    }

    /// Set serialization configuration
    pub fn with_serialization(mut self, serialization: SerializationOptions) -> Self {
        self.serialization = serialization;
        self
    }

    /// Restrict or reorder the strategies
    pub fn with_formats<I: IntoIterator<Item = SerializationFormat>>(mut self, formats: I) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Build one adapter per configured format
    pub fn codecs(&self) -> Vec<Box<dyn Codec>> {
        self.formats
            .iter()
            .map(|format| format.codec(&self.serialization))
            .collect()
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}
