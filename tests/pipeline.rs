use grapher::config::{DEFAULT_OUTPUT_FILE, DEFAULT_TIME_FILE};
use grapher::data::loader::load_file;
use grapher::error::PlotError;
use grapher::plot::compose;
use grapher::signal::{generate, write_sequence, SignalKind, SignalParams};

#[test]
fn generated_signal_loads_and_composes() {
    let dir = tempfile::tempdir().unwrap();
    let time_path = dir.path().join(DEFAULT_TIME_FILE);
    let output_path = dir.path().join(DEFAULT_OUTPUT_FILE);

    let params = SignalParams {
        amplitude: 1.5,
        frequency: 3.0,
        duration: 0.5,
        sample_rate: 200.0,
    };
    let sig = generate(SignalKind::Sine, &params).unwrap();
    write_sequence(&time_path, &sig.time).unwrap();
    write_sequence(&output_path, &sig.output).unwrap();

    let time = load_file(&time_path).unwrap();
    let output = load_file(&output_path).unwrap();
    assert_eq!(time.values(), sig.time.as_slice());
    assert_eq!(output.values(), sig.output.as_slice());

    let plot = compose(&time, &output).unwrap();
    assert_eq!(plot.point_count(), 100);
    for (i, point) in plot.series()[0].iter().enumerate() {
        assert_eq!(*point, [sig.time[i], sig.output[i]]);
    }
    assert_eq!(plot.title(), "time vs Amplitude");
}

#[test]
fn rewriting_truncates_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_TIME_FILE);

    write_sequence(&path, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    write_sequence(&path, &[5.0]).unwrap();
    assert_eq!(load_file(&path).unwrap().values(), &[5.0]);
}

#[test]
fn mismatched_files_do_not_compose() {
    let dir = tempfile::tempdir().unwrap();
    let time_path = dir.path().join(DEFAULT_TIME_FILE);
    let output_path = dir.path().join(DEFAULT_OUTPUT_FILE);
    write_sequence(&time_path, &[0.0, 1.0, 2.0]).unwrap();
    write_sequence(&output_path, &[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();

    let err = compose(&load_file(&time_path).unwrap(), &load_file(&output_path).unwrap())
        .unwrap_err();
    assert_eq!(err, PlotError::LengthMismatch { x: 3, y: 5 });
}

#[test]
fn single_row_files_compose_into_one_series() {
    let dir = tempfile::tempdir().unwrap();
    let time_path = dir.path().join(DEFAULT_TIME_FILE);
    let output_path = dir.path().join(DEFAULT_OUTPUT_FILE);
    std::fs::write(&time_path, "0 1 2\n").unwrap();
    std::fs::write(&output_path, "3 4 5\n").unwrap();

    let plot = compose(&load_file(&time_path).unwrap(), &load_file(&output_path).unwrap())
        .unwrap();
    assert_eq!(plot.series().len(), 1);
    assert_eq!(plot.series()[0], vec![[0.0, 3.0], [1.0, 4.0], [2.0, 5.0]]);
}
