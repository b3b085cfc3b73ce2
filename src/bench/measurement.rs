use std::fmt;
use std::time::Duration;

/// Timing of one encode/decode pass for one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Strategy label
    pub label: &'static str,
    /// Wall time spent encoding
    pub encode_time: Duration,
    /// Wall time spent decoding
    pub decode_time: Duration,
    /// Size of the encoded payload in bytes
    pub encoded_len: usize,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}\t\tEncoding time: {:?}\t Decoding time: {:?}\t Encoded length: {}",
            self.label, self.encode_time, self.decode_time, self.encoded_len
        )
    }
}
