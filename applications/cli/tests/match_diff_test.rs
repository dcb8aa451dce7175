//! End-to-end tests for the matcher and diff commands
//!
//! Fixtures are sine tones written with hound, plus a FLAC target that
//! carries a front cover.

use loudmatch_artwork::{embed_front_cover, read_front_cover, CoverArt};
use loudmatch_audio::{incomplete_marker, FlacEncoder, OutputFormat, SymphoniaDecoder};
use loudmatch_cli::commands::{diff, matcher};
use loudmatch_cli::CliError;
use loudmatch_core::AudioEncoder;
use loudmatch_loudness::{dbfs, MeasureMode};
use std::path::{Path, PathBuf};

/// Write a 16-bit stereo sine at `amplitude` (0..1)
fn write_tone(path: &Path, amplitude: f32, frequency: f32) {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..44_100 {
        let t = i as f32 / 44_100.0;
        let value = (amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin() * 32767.0) as i16;
        writer.write_sample(value).unwrap();
        writer.write_sample(value).unwrap();
    }
    writer.finalize().unwrap();
}

fn tone_in(dir: &Path, name: &str, amplitude: f32) -> PathBuf {
    let path = dir.join(name);
    write_tone(&path, amplitude, 440.0);
    path
}

/// Re-encode a WAV tone as FLAC and embed a PNG front cover
fn flac_with_cover(dir: &Path, name: &str, amplitude: f32, cover: &[u8]) -> PathBuf {
    let wav = tone_in(dir, "staging.wav", amplitude);
    let buffer = SymphoniaDecoder::decode_file(&wav).unwrap();
    std::fs::remove_file(&wav).unwrap();

    let path = dir.join(name);
    FlacEncoder::new().encode(&buffer, &path).unwrap();
    embed_front_cover(&path, &CoverArt::new(cover.to_vec(), Some("image/png".to_string())))
        .unwrap();
    path
}

fn png_bytes() -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 2, 8, 2, 0, 0, 0]);
    data.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    data
}

fn measured_dbfs(path: &Path) -> f64 {
    dbfs(&SymphoniaDecoder::decode_file(path).unwrap())
}

#[test]
fn matcher_writes_gained_flac_at_reference_level() {
    let dir = tempfile::tempdir().unwrap();
    let reference = tone_in(dir.path(), "reference.wav", 0.5);
    let cover = png_bytes();
    let target = flac_with_cover(dir.path(), "quiet.flac", 0.1, &cover);

    let mut out = Vec::new();
    let outcome = matcher::run(&reference, &target, &matcher::MatchOptions::default(), &mut out)
        .unwrap();

    assert_eq!(outcome.output, dir.path().join("quiet.flac - GAINED.flac"));
    assert!(outcome.output.exists());
    assert!(!incomplete_marker(&outcome.output).exists());

    // About +14 dB from 0.1 to 0.5 amplitude
    assert!((outcome.gain.db() - 13.98).abs() < 0.05, "{}", outcome.gain);

    let expected = measured_dbfs(&reference);
    let actual = measured_dbfs(&outcome.output);
    assert!(
        (actual - expected).abs() < 0.05,
        "output {} dBFS, reference {} dBFS",
        actual,
        expected
    );

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed.trim_end(),
        format!("dBFS: {:?} -> {:?}", outcome.target.value, outcome.reference.value)
    );

    // The target's cover travels with it
    assert_eq!(read_front_cover(&outcome.output).unwrap().data, cover);
}

#[test]
fn matcher_honors_format_output_and_cover_options() {
    let dir = tempfile::tempdir().unwrap();
    let reference = tone_in(dir.path(), "reference.wav", 0.4);
    let target = flac_with_cover(dir.path(), "quiet.flac", 0.2, &png_bytes());
    let output = dir.path().join("out").join("matched.wav");

    let options = matcher::MatchOptions {
        format: OutputFormat::Wav,
        output: Some(output.clone()),
        copy_cover: false,
        tail_silence: std::time::Duration::from_millis(500),
        ..matcher::MatchOptions::default()
    };

    let mut out = Vec::new();
    let outcome = matcher::run(&reference, &target, &options, &mut out).unwrap();

    assert_eq!(outcome.output, output);
    assert!(outcome.cover.is_none());

    let reader = hound::WavReader::open(&output).unwrap();
    // One second of tone plus half a second of silence
    assert_eq!(reader.duration(), 44_100 + 22_050);
}

#[test]
fn matcher_rejects_silent_target() {
    let dir = tempfile::tempdir().unwrap();
    let reference = tone_in(dir.path(), "reference.wav", 0.5);
    let target = tone_in(dir.path(), "silent.wav", 0.0);

    let mut out = Vec::new();
    let result = matcher::run(&reference, &target, &matcher::MatchOptions::default(), &mut out);

    assert!(result.is_err());
    assert!(!dir.path().join("silent.wav - GAINED.flac").exists());
}

#[test]
fn diff_reports_every_pair_and_the_mean() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let levels = [("a.wav", 0.5, 0.25), ("b.wav", 0.3, 0.3), ("c.wav", 0.1, 0.4)];
    for (name, one, two) in levels {
        tone_in(first.path(), name, one);
        tone_in(second.path(), name, two);
    }

    let mut out = Vec::new();
    let report = diff::run(first.path(), second.path(), MeasureMode::Dbfs, &mut out).unwrap();
    assert_eq!(report.len(), 3);

    let printed = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[a.wav] dBFS: "));
    assert!(lines[1].starts_with("[b.wav] dBFS: "));
    assert!(lines[2].starts_with("[c.wav] dBFS: "));

    // Ratios follow the amplitude ratios of the fixtures
    let ratios: Vec<f64> = report.entries().iter().map(|e| e.ratio).collect();
    assert!((ratios[0] - 2.0).abs() < 0.01);
    assert!((ratios[1] - 1.0).abs() < 0.01);
    assert!((ratios[2] - 0.25).abs() < 0.01);

    let mean = ratios.iter().sum::<f64>() / 3.0;
    assert_eq!(lines[3], format!("Average gain: {:?}", report.mean_ratio().unwrap()));
    assert!((report.mean_ratio().unwrap() - mean).abs() < 1e-12);
}

#[test]
fn diff_aborts_on_missing_counterpart() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    tone_in(first.path(), "a.wav", 0.5);
    tone_in(second.path(), "a.wav", 0.5);
    tone_in(first.path(), "b.wav", 0.5);

    let mut out = Vec::new();
    let result = diff::run(first.path(), second.path(), MeasureMode::Dbfs, &mut out);

    assert!(matches!(result, Err(CliError::MissingPair { .. })));
    assert!(out.is_empty());
}

#[test]
fn diff_of_empty_directory_is_an_error() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let mut out = Vec::new();
    let result = diff::run(first.path(), second.path(), MeasureMode::Dbfs, &mut out);
    assert!(matches!(result, Err(CliError::NoFiles(_))));
}

#[test]
fn diff_fails_on_undecodable_file() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    std::fs::write(first.path().join("x.wav"), b"not audio").unwrap();
    tone_in(second.path(), "x.wav", 0.5);

    let mut out = Vec::new();
    let result = diff::run(first.path(), second.path(), MeasureMode::Dbfs, &mut out);
    assert!(matches!(result, Err(CliError::Core(_))));
}
