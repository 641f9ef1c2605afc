use std::fs;

use subsift_core::{OracleAnswers, Session, SessionConfig};
use tempfile::tempdir;

#[test]
fn load_from_file_and_play() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.toml");
    fs::write(&path, "lower = -10\nupper = 10\nmax_span = 5\n").expect("write config");

    let cfg = SessionConfig::load(&path).expect("config loads");
    assert_eq!(cfg.lower, -10);
    assert_eq!(cfg.upper, 10);
    assert!(cfg.strict);
    assert!(cfg.exceeds_max_span());

    let session = Session::from_config(&cfg).unwrap();
    assert_eq!(session.partition().len(), 5);
    let outcome = session.run(&mut OracleAnswers::new(-3)).unwrap();
    assert_eq!(outcome.guess, -3);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = format!("{:#}", SessionConfig::load(&path).unwrap_err());
    assert!(err.contains("absent.toml"), "{err}");
}

#[test]
fn malformed_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "lower = \"one\"\nupper = 2\n").unwrap();
    assert!(SessionConfig::load(&path).is_err());

    fs::write(&path, "lower = 2\nupper = 2\n").unwrap();
    let err = format!("{:#}", SessionConfig::load(&path).unwrap_err());
    assert!(err.contains("must be below"), "{err}");
}
