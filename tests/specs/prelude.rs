// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing siteaudit CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::io::{self, BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the siteaudit binary
///
/// Environment that would change results (API key, config path, color
/// forcing, proxies) is cleared.
pub fn siteaudit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("siteaudit"));
    for var in CLEARED_ENV {
        cmd.env_remove(var);
    }
    cmd
}

const CLEARED_ENV: &[&str] = &[
    "SITEAUDIT_PAGESPEED_KEY",
    "SITEAUDIT_CONFIG",
    "SITEAUDIT_LOG",
    "COLOR",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Create a check builder for the named check (runs only that check)
pub fn check(name: &str) -> CheckBuilder<Text, Single> {
    CheckBuilder::new(Single(name.to_string()))
}

/// Create a check builder that runs all checks
pub fn cli() -> CheckBuilder<Text, All> {
    CheckBuilder::new(All)
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;
pub struct Html;

/// Typestate markers for check scope
pub struct Single(String);
pub struct All;

/// Trait for getting check name from scope
pub trait ScopeName {
    fn check_name(&self) -> Option<&str>;
}

impl ScopeName for Single {
    fn check_name(&self) -> Option<&str> {
        Some(&self.0)
    }
}

impl ScopeName for All {
    fn check_name(&self) -> Option<&str> {
        None
    }
}

/// High-level check builder for fluent test assertions
pub struct CheckBuilder<Mode = Text, Scope = All> {
    scope: Scope,
    dir: Option<std::path::PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

impl<Scope> CheckBuilder<Text, Scope> {
    fn new(scope: Scope) -> Self {
        Self {
            scope,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> CheckBuilder<Json, Scope> {
        self.into_mode()
    }

    pub fn html(self) -> CheckBuilder<Html, Scope> {
        self.into_mode()
    }

    fn into_mode<M>(self) -> CheckBuilder<M, Scope> {
        CheckBuilder {
            scope: self.scope,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }
}

#[allow(dead_code)]
impl<Scope: ScopeName> CheckBuilder<Text, Scope> {
    pub fn passes(self) -> RunAssert {
        run_passes(self.command())
    }

    pub fn fails(self) -> RunAssert {
        run_fails(self.command())
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

#[allow(dead_code)]
impl<Scope: ScopeName> CheckBuilder<Html, Scope> {
    pub fn passes(self) -> RunAssert {
        run_passes(self.command())
    }

    pub fn fails(self) -> RunAssert {
        run_fails(self.command())
    }
}

// Single check builder (JSON mode) -> returns CheckJson
#[allow(dead_code)]
impl CheckBuilder<Json, Single> {
    pub fn passes(self) -> CheckJson {
        let name = self.scope.0.clone();
        let output = run_passes(self.command());
        CheckJson::new(&output.output.stdout, &name)
    }

    pub fn fails(self) -> CheckJson {
        let name = self.scope.0.clone();
        let output = run_fails(self.command());
        CheckJson::new(&output.output.stdout, &name)
    }
}

// All checks builder (JSON mode) -> returns ChecksJson
#[allow(dead_code)]
impl CheckBuilder<Json, All> {
    pub fn passes(self) -> ChecksJson {
        let output = run_passes(self.command());
        ChecksJson::new(&output.output.stdout)
    }

    pub fn fails(self) -> ChecksJson {
        let output = run_fails(self.command());
        ChecksJson::new(&output.output.stdout)
    }
}

#[allow(dead_code)]
impl<Mode: 'static, Scope: ScopeName> CheckBuilder<Mode, Scope> {
    /// Set fixture directory by name
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Set working directory (alternative to fixture)
    pub fn pwd(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the command without running it
    fn command(self) -> Command {
        let mode = std::any::TypeId::of::<Mode>();
        let mut cmd = siteaudit_cmd();
        cmd.arg("check");

        if let Some(name) = self.scope.check_name() {
            cmd.arg(format!("--{}", name.replace('_', "-")));
        }

        if mode == std::any::TypeId::of::<Json>() {
            cmd.args(["-o", "json"]);
        } else if mode == std::any::TypeId::of::<Html>() {
            cmd.args(["-o", "html"]);
        }

        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

fn run_passes(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "expected check to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn run_fails(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        !output.status.success(),
        "expected check to fail, but it passed\nstdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    RunAssert { output }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Single check JSON output
pub struct CheckJson {
    root: serde_json::Value,
    name: String,
}

#[allow(dead_code)]
impl CheckJson {
    fn new(stdout: &[u8], name: &str) -> Self {
        let root: serde_json::Value = serde_json::from_slice(stdout).expect("valid JSON");
        Self {
            root,
            name: name.to_string(),
        }
    }

    /// Get the root JSON value
    pub fn value(&self) -> &serde_json::Value {
        &self.root
    }

    /// Get the check object
    pub fn check(&self) -> &serde_json::Value {
        self.root
            .get("checks")
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .find(|c| c.get("name").and_then(|n| n.as_str()) == Some(&self.name))
            .unwrap_or_else(|| panic!("check '{}' not found", self.name))
    }

    /// Get field from the check, returns None if missing
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.check().get(key)
    }

    /// Get a string field from the check, panics if missing
    pub fn require_str(&self, key: &str) -> &str {
        self.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| panic!("expected string '{}' in check JSON", key))
    }

    /// The check's score, panics if the check was skipped
    pub fn score(&self) -> &str {
        self.require_str("score")
    }
}

/// All checks JSON output
pub struct ChecksJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl ChecksJson {
    fn new(stdout: &[u8]) -> Self {
        let root: serde_json::Value = serde_json::from_slice(stdout).expect("valid JSON");
        Self { root }
    }

    /// Get the root JSON value
    pub fn value(&self) -> &serde_json::Value {
        &self.root
    }

    /// Get all checks as array
    pub fn checks(&self) -> &Vec<serde_json::Value> {
        self.root.get("checks").and_then(|v| v.as_array()).unwrap()
    }

    /// Check names in output order
    pub fn names(&self) -> Vec<&str> {
        self.checks()
            .iter()
            .filter_map(|c| c.get("name").and_then(|n| n.as_str()))
            .collect()
    }
}

/// Result of a check run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Project
// =============================================================================

/// Temporary site directory with helper methods.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[check.views_cache]\nsource = \"views.json\"");
/// temp.file("views.json", "[]");
/// check("views_cache").pwd(temp.path()).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write siteaudit.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("siteaudit.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

// =============================================================================
// PageSpeed stub
// =============================================================================

/// One-shot PageSpeed API stand-in on a local port.
pub struct Stub {
    pub endpoint: String,
    outcome: Receiver<io::Result<String>>,
}

#[allow(dead_code)]
impl Stub {
    /// Request line the stub answered.
    ///
    /// Panics with the stub's own I/O error if serving failed, so a broken
    /// stub is not mistaken for a client problem.
    pub fn request_line(&self) -> String {
        match self.outcome.recv_timeout(Duration::from_secs(30)) {
            Ok(Ok(line)) => line,
            Ok(Err(e)) => panic!("stub server failed: {e}"),
            Err(_) => panic!("stub server saw no request"),
        }
    }
}

/// Serve `body` as JSON to the first request on a local port.
pub fn serve_once(status: u16, body: &str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/runPagespeed", listener.local_addr().unwrap());
    let body = body.to_string();
    let (tx, outcome) = mpsc::channel();

    std::thread::spawn(move || {
        let _ = tx.send(answer(&listener, status, &body));
    });

    Stub { endpoint, outcome }
}

fn answer(listener: &TcpListener, status: u16, body: &str) -> io::Result<String> {
    let (stream, _) = listener.accept()?;
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" {
            break;
        }
    }

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )?;
    stream.flush()?;
    Ok(request_line.trim_end().to_string())
}
