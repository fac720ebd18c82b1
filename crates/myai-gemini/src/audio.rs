//! Decoding of inline speech payloads.
//!
//! The TTS model answers with base64 of raw 16-bit little-endian mono PCM and
//! a mime type such as `audio/L16;codec=pcm;rate=24000`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use myai_core::SpeechAudio;

use crate::error::{GeminiError, GeminiResult};
use crate::models::InlineData;

/// Sample rate assumed when the mime type does not carry one.
pub const DEFAULT_TTS_SAMPLE_RATE: u32 = 24_000;

/// Decode an inline PCM payload into playable samples.
pub fn decode_inline_audio(inline: &InlineData) -> GeminiResult<SpeechAudio> {
    let bytes = STANDARD
        .decode(inline.data.trim())
        .map_err(|e| GeminiError::AudioDecode(e.to_string()))?;
    if bytes.is_empty() {
        return Err(GeminiError::NoAudio);
    }

    let sample_rate = sample_rate_from_mime(&inline.mime_type).unwrap_or(DEFAULT_TTS_SAMPLE_RATE);
    let samples = pcm16_le_to_f32(&bytes)?;

    tracing::debug!(
        mime_type = %inline.mime_type,
        sample_rate,
        samples = samples.len(),
        "Decoded speech payload"
    );
    Ok(SpeechAudio::mono(samples, sample_rate))
}

/// Convert 16-bit little-endian PCM bytes to `f32` samples in `[-1.0, 1.0)`.
pub fn pcm16_le_to_f32(bytes: &[u8]) -> GeminiResult<Vec<f32>> {
    if bytes.len() % 2 != 0 {
        return Err(GeminiError::AudioDecode(format!(
            "PCM16 payload has odd length {}",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
        .collect())
}

/// Extract the `rate=` parameter from a mime type, if present and valid.
pub fn sample_rate_from_mime(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .filter(|rate| *rate > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(mime_type: &str, bytes: &[u8]) -> InlineData {
        InlineData {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        }
    }

    #[test]
    fn converts_pcm16_extremes() {
        let samples = pcm16_le_to_f32(&[0x00, 0x80, 0x00, 0x00, 0x00, 0x40]).unwrap();
        assert_eq!(samples, vec![-1.0, 0.0, 0.5]);
    }

    #[test]
    fn odd_length_is_a_decode_error() {
        let err = pcm16_le_to_f32(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, GeminiError::AudioDecode(_)));
    }

    #[test]
    fn rate_is_read_from_mime_type() {
        assert_eq!(
            sample_rate_from_mime("audio/L16;codec=pcm;rate=24000"),
            Some(24_000)
        );
        assert_eq!(sample_rate_from_mime("audio/L16; rate=16000"), Some(16_000));
        assert_eq!(sample_rate_from_mime("audio/L16"), None);
        assert_eq!(sample_rate_from_mime("audio/L16;rate=0"), None);
    }

    #[test]
    fn decodes_payload_with_default_rate() {
        let audio = decode_inline_audio(&inline("audio/L16", &[0, 0, 0, 0])).unwrap();
        assert_eq!(audio.sample_rate, DEFAULT_TTS_SAMPLE_RATE);
        assert_eq!(audio.channels, 1);
        assert_eq!(audio.samples.len(), 2);
    }

    #[test]
    fn empty_payload_is_no_audio() {
        let err = decode_inline_audio(&inline("audio/L16;rate=24000", &[])).unwrap_err();
        assert!(matches!(err, GeminiError::NoAudio));
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let bad = InlineData {
            mime_type: "audio/L16".to_string(),
            data: "not base64!".to_string(),
        };
        assert!(matches!(
            decode_inline_audio(&bad),
            Err(GeminiError::AudioDecode(_))
        ));
    }
}
