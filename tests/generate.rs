use fastrand::Rng;

use chime::{SongError, SongMachine};

#[test]
fn upbeat_two_second_song_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upbeat.wav");
    let path = path.to_str().unwrap();

    let machine = SongMachine::new();
    let written = machine
        .generate("upbeat", 2.0, Some(path), &mut Rng::with_seed(11))
        .unwrap();
    assert_eq!(written, path);

    let mut reader = hound::WavReader::open(path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.len(), 88200); // 2s at 44100 Hz

    // normalization drives the loudest sample to exactly full scale
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    let peak = samples.iter().map(|s| (*s as i32).abs()).max().unwrap();
    assert_eq!(peak, 32767);
}

#[test]
fn same_seed_writes_byte_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.wav");
    let second = dir.path().join("second.wav");

    let machine = SongMachine::new();
    machine
        .generate(
            "ambient",
            1.5,
            Some(first.to_str().unwrap()),
            &mut Rng::with_seed(42),
        )
        .unwrap();
    machine
        .generate(
            "ambient",
            1.5,
            Some(second.to_str().unwrap()),
            &mut Rng::with_seed(42),
        )
        .unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn unknown_style_still_produces_a_song() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fallback.wav");
    let path = path.to_str().unwrap();

    // unrecognized names quietly use the relaxing profile
    let machine = SongMachine::new();
    machine
        .generate("unknown_style", 1.0, Some(path), &mut Rng::with_seed(5))
        .unwrap();

    let reader = hound::WavReader::open(path).unwrap();
    assert_eq!(reader.len(), 44100);
}

#[test]
fn bad_duration_leaves_no_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.wav");

    let machine = SongMachine::new();
    let err = machine
        .generate(
            "relaxing",
            -1.0,
            Some(path.to_str().unwrap()),
            &mut Rng::with_seed(0),
        )
        .unwrap_err();

    assert!(matches!(err, SongError::ParameterError(_)));
    assert!(!path.exists());
}
