use std::hint::black_box;
use std::time::Instant;

use super::Measurement;
use crate::record::Record;
use crate::serialization::Codec;

/// Time a single encode and a single decode of `record`.
///
/// The decoded value is not compared against the input. There is no
/// warm-up and no repetition, so the numbers are one sample each.
pub fn measure(codec: &dyn Codec, record: &Record) -> Measurement {
    let start = Instant::now();
    let encoded = codec.encode(record);
    let encode_time = start.elapsed();

    let start = Instant::now();
    let decoded = codec.decode(&encoded);
    let decode_time = start.elapsed();
    black_box(decoded);

    Measurement {
        label: codec.label(),
        encode_time,
        decode_time,
        encoded_len: encoded.len(),
    }
}

/// Measure every codec in order, logging one report line each
pub fn run<C: Codec>(record: &Record, codecs: &[C]) -> Vec<Measurement> {
    codecs
        .iter()
        .map(|codec| {
            let measurement = measure(codec, record);
            log::info!("{measurement}");
            measurement
        })
        .collect()
}

/// Push `record` through every encoder, then every decoder, discarding the
/// results. Not part of a normal run.
pub fn verify<C: Codec>(record: &Record, codecs: &[C]) {
    let payloads: Vec<Vec<u8>> = codecs.iter().map(|codec| codec.encode(record)).collect();
    for (codec, payload) in codecs.iter().zip(&payloads) {
        black_box(codec.decode(payload));
    }
}
