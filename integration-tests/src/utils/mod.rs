use std::fs;
use std::path::PathBuf;

use chain_args::ArgsManager;
use chainparams::{setup_node_args, APP_NAME};
use common::init_logger;
use ctor::ctor;
use tempfile::TempDir;

/// Host arguments with every option registered and `argv` parsed.
pub fn node_args(argv: &[&str]) -> ArgsManager {
    let args = ArgsManager::new(APP_NAME);
    setup_node_args(&args);
    args.parse_parameters(std::iter::once(APP_NAME).chain(argv.iter().copied()))
        .expect("arguments should parse");
    args
}

/// Write `contents` to a config file in a fresh temp dir. Keep the dir alive
/// for as long as the file is needed.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("chainparams.toml");
    fs::write(&path, contents).expect("config should be written");
    (dir, path)
}

#[ctor]
fn init_test_tracing() {
    let has_nocapture = std::env::args().any(|arg| arg == "--nocapture" || arg == "--show-output");
    if has_nocapture {
        init_logger("debug").ok();
    }
}
