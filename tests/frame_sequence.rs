use wavemap::animation::FrameDriver;
use wavemap::params::{RecordingConfig, RenderConfig, SeaState, ShortWaveMode};
use wavemap::rendering::PngFrameWriter;

fn render_config() -> RenderConfig {
    RenderConfig {
        image_width: 240,
        image_height: 200,
        ..Default::default()
    }
}

#[test]
fn test_writes_numbered_png_frames() {
    let scratch = tempfile::tempdir().unwrap();
    let dir = scratch.path().join("numbered");
    let recording = RecordingConfig {
        output_dir: dir.clone(),
        num_frames: 3,
        time_step_s: 0.2,
        seed: Some(1),
        short_wave_mode: ShortWaveMode::RedrawEachFrame,
    };
    let sea_state = SeaState {
        grid_size: 20,
        ..Default::default()
    };

    let mut writer = PngFrameWriter::new(render_config());
    let summary = FrameDriver::from_config(sea_state, recording)
        .run(&mut writer)
        .unwrap();

    assert_eq!(summary.frames_written, 3);
    assert_eq!(summary.output_dir, dir);
    for name in ["frame_000.png", "frame_001.png", "frame_002.png"] {
        let img = image::open(dir.join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (240, 200));
    }
    assert!(!dir.join("frame_003.png").exists());
}

#[test]
fn test_frames_follow_configured_directory() {
    let scratch = tempfile::tempdir().unwrap();
    let dir = scratch.path().join("a").join("b");
    let recording = RecordingConfig {
        output_dir: dir.clone(),
        num_frames: 1,
        seed: Some(4),
        ..Default::default()
    };
    let sea_state = SeaState {
        grid_size: 8,
        ..Default::default()
    };

    let mut writer = PngFrameWriter::new(render_config());
    let summary = FrameDriver::from_config(sea_state, recording)
        .run(&mut writer)
        .unwrap();

    assert_eq!(summary.output_dir, dir);
    assert!(dir.join("frame_000.png").is_file());
}

#[test]
fn test_rerun_into_existing_directory_overwrites() {
    let scratch = tempfile::tempdir().unwrap();
    let dir = scratch.path().join("rerun");
    let recording = RecordingConfig {
        output_dir: dir.clone(),
        num_frames: 1,
        seed: Some(8),
        ..Default::default()
    };
    let sea_state = SeaState {
        grid_size: 10,
        ..Default::default()
    };

    for _ in 0..2 {
        let mut writer = PngFrameWriter::new(render_config());
        FrameDriver::from_config(sea_state.clone(), recording.clone())
            .run(&mut writer)
            .unwrap();
    }
    assert!(dir.join("frame_000.png").is_file());
}

#[test]
fn test_seeded_frames_are_byte_identical() {
    let scratch = tempfile::tempdir().unwrap();
    let render = |name: &str| {
        let dir = scratch.path().join(name);
        let recording = RecordingConfig {
            output_dir: dir.clone(),
            num_frames: 2,
            seed: Some(21),
            ..Default::default()
        };
        let sea_state = SeaState {
            grid_size: 16,
            ..Default::default()
        };
        let mut writer = PngFrameWriter::new(render_config());
        FrameDriver::from_config(sea_state, recording)
            .run(&mut writer)
            .unwrap();
        std::fs::read(dir.join("frame_001.png")).unwrap()
    };

    assert_eq!(render("seeded-a"), render("seeded-b"));
}

#[test]
fn test_unwritable_output_dir_fails() {
    let blocker = tempfile::NamedTempFile::new().unwrap();

    let recording = RecordingConfig {
        output_dir: blocker.path().join("frames"),
        num_frames: 1,
        seed: Some(0),
        ..Default::default()
    };
    let mut writer = PngFrameWriter::new(render_config());
    let result = FrameDriver::from_config(SeaState::default(), recording).run(&mut writer);
    assert!(result.is_err());
}
