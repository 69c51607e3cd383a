#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: &str = "1234";

pub fn dl() -> Command {
    cargo_bin_cmd!("dutylog")
}

/// Per-test config file and period folder inside the system temp dir,
/// wiped before use.
pub struct TestEnv {
    pub config: String,
    pub folder: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let mut root: PathBuf = env::temp_dir();
        root.push(format!("dutylog_test_{name}"));
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(&root).expect("create test root");

        let config = root.join("dutylog.conf").to_string_lossy().to_string();
        let folder = root.join("semester").to_string_lossy().to_string();

        Self { config, folder }
    }

    /// `dutylog --config <file> <args...>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = dl();
        cmd.arg("--config").arg(&self.config).args(args);
        cmd
    }

    /// Same as [`cmd`] with the administrator password supplied.
    pub fn admin(&self, args: &[&str]) -> Command {
        let mut cmd = self.cmd(args);
        cmd.args(["--password", ADMIN]);
        cmd
    }

    pub fn init(&self) {
        self.cmd(&["init", "--folder", &self.folder])
            .assert()
            .success();
    }

    /// Initialized period whose roster holds `names`.
    pub fn init_with_staff(&self, names: &[&str]) {
        self.init();
        for name in names {
            self.admin(&["staff", "--add", name]).assert().success();
        }
    }

    pub fn punch(&self, action: &str, name: &str, at: &str) {
        self.admin(&[action, name, "--at", at]).assert().success();
    }

    pub fn out_file(&self, name: &str) -> String {
        let p = PathBuf::from(&self.folder)
            .parent()
            .map(|d| d.join(name))
            .expect("test root");
        fs::remove_file(&p).ok();
        p.to_string_lossy().to_string()
    }
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}
