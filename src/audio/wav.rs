//! WAV decoding for transcription input.
//!
//! Accepts arbitrary sample rates and channel counts, downmixing to mono
//! and resampling to the 16kHz the speech model expects.

use crate::defaults::SAMPLE_RATE;
use crate::error::{MedscribeError, Result};
use std::io::Read;
use std::path::Path;

/// Decode WAV data from any reader into 16kHz mono i16 samples.
pub fn decode_reader(reader: Box<dyn Read>) -> Result<Vec<i16>> {
    let mut wav_reader = hound::WavReader::new(reader).map_err(|e| MedscribeError::AudioDecode {
        message: format!("Failed to parse WAV data: {}", e),
    })?;

    let spec = wav_reader.spec();
    let source_rate = spec.sample_rate;
    let source_channels = spec.channels;

    let raw_samples: Vec<i16> = wav_reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| MedscribeError::AudioDecode {
            message: format!("Failed to read WAV samples: {}", e),
        })?;

    // Convert to mono if stereo
    let mono_samples = if source_channels == 2 {
        raw_samples
            .chunks_exact(2)
            .map(|chunk| {
                let left = chunk[0] as i32;
                let right = chunk[1] as i32;
                ((left + right) / 2) as i16
            })
            .collect()
    } else {
        raw_samples
    };

    // Resample to 16kHz if needed
    let samples = if source_rate != SAMPLE_RATE {
        resample(&mono_samples, source_rate, SAMPLE_RATE)
    } else {
        mono_samples
    };

    Ok(samples)
}

/// Decode a WAV file on disk into 16kHz mono i16 samples.
pub fn decode_path(path: &Path) -> Result<Vec<i16>> {
    let file = std::fs::File::open(path).map_err(|e| MedscribeError::AudioDecode {
        message: format!("Failed to open {}: {}", path.display(), e),
    })?;
    decode_reader(Box::new(file))
}

/// Decode in-memory WAV bytes into 16kHz mono i16 samples.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    decode_reader(Box::new(std::io::Cursor::new(bytes.to_vec())))
}

/// Simple linear interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[samples.len() - 1]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn make_wav_data(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_decode_16khz_mono_passthrough() {
        let samples: Vec<i16> = (0..1600).map(|i| (i % 100) as i16).collect();
        let data = make_wav_data(16000, 1, &samples);
        let decoded = decode_bytes(&data).unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn test_decode_stereo_downmixes() {
        // L=100, R=300 → mono 200
        let samples: Vec<i16> = vec![100, 300, 100, 300];
        let data = make_wav_data(16000, 2, &samples);
        let decoded = decode_bytes(&data).unwrap();
        assert_eq!(decoded, vec![200, 200]);
    }

    #[test]
    fn test_decode_resamples_to_16khz() {
        let samples: Vec<i16> = vec![0; 44100];
        let data = make_wav_data(44100, 1, &samples);
        let decoded = decode_bytes(&data).unwrap();
        // One second of 44.1kHz → ~16000 samples
        assert!((15900..=16100).contains(&decoded.len()), "{}", decoded.len());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_bytes(b"definitely not a wav file");
        assert!(matches!(
            result,
            Err(MedscribeError::AudioDecode { .. })
        ));
    }

    #[test]
    fn test_decode_path_missing_file() {
        let result = decode_path(Path::new("/nonexistent/clip.wav"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resample_identity() {
        let samples = vec![1, 2, 3];
        assert_eq!(resample(&samples, 16000, 16000), samples);
    }

    #[test]
    fn test_resample_empty() {
        assert!(resample(&[], 44100, 16000).is_empty());
    }

    #[test]
    fn test_resample_downsamples_by_half() {
        let samples: Vec<i16> = (0..100).collect();
        let out = resample(&samples, 32000, 16000);
        assert_eq!(out.len(), 50);
    }
}
