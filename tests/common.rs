#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;

pub fn ems() -> Command {
    cargo_bin_cmd!("emstrack")
}

/// An emstrack command with HOME pointed at an isolated directory, so
/// config, credentials and the read-notification set never touch the real
/// user profile.
pub fn ems_in(home: &PathBuf) -> Command {
    let mut cmd = ems();
    cmd.env("HOME", home);
    cmd.env("APPDATA", home);
    cmd
}

pub fn temp_home(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("{}_emstrack_home", name));
    std::fs::remove_dir_all(&path).ok();
    std::fs::create_dir_all(&path).expect("create temp home");
    path
}
