//! Placeholder speech encoding.

use std::io::Cursor;

use crate::error::Result;

/// Sample rate of placeholder speech.
pub const SAMPLE_RATE: u32 = 22050;

/// Seconds of audio budgeted per input character.
const SECONDS_PER_CHAR: f64 = 0.1;

/// Longest text accepted for synthesis (500 s of placeholder audio).
pub const MAX_SPEECH_CHARS: usize = 5000;

/// Number of samples the placeholder emits for `text`.
pub fn placeholder_sample_count(text: &str) -> usize {
    (text.chars().count() as f64 * SECONDS_PER_CHAR * SAMPLE_RATE as f64) as usize
}

/// Silent mono 16-bit WAV sized to the text length.
pub fn silent_speech_wav(text: &str) -> Result<Vec<u8>> {
    let count = placeholder_sample_count(text);
    encode_wav_i16(std::iter::repeat(0i16).take(count), SAMPLE_RATE)
}

/// Encode mono 16-bit samples; only the output buffer is held in memory.
pub fn encode_wav_i16<I>(samples: I, sample_rate: u32) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = i16>,
{
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let samples = samples.into_iter();
    let (hint, _) = samples.size_hint();
    let mut cursor = Cursor::new(Vec::with_capacity(44 + hint * 2));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_tracks_character_count() {
        assert_eq!(placeholder_sample_count(""), 0);
        assert_eq!(placeholder_sample_count("Hello"), 11025);
        // multi-byte characters count once
        assert_eq!(placeholder_sample_count("héllo"), 11025);
    }

    #[test]
    fn silent_wav_round_trips_through_hound() {
        let wav = silent_speech_wav("Bond").unwrap();
        let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.len() as usize, placeholder_sample_count("Bond"));
        assert!(reader.samples::<i16>().all(|s| s.unwrap() == 0));
    }

    #[test]
    fn longest_accepted_text_stays_small() {
        let text = "a".repeat(MAX_SPEECH_CHARS);
        let samples = placeholder_sample_count(&text);
        assert_eq!(samples, 11_025_000);
        let wav = silent_speech_wav(&text).unwrap();
        assert_eq!(wav.len(), 44 + samples * 2);
    }

    #[test]
    fn empty_text_is_a_valid_empty_wav() {
        let wav = silent_speech_wav("").unwrap();
        let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        assert_eq!(reader.len(), 0);
    }
}
