use crate::error::{HotError, Result};
use crate::model::LogScope;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::debug;

/// Produces the flat, newest-first line stream of a repository's history.
pub trait HistorySource {
    fn history(&self, scope: &LogScope) -> Result<Vec<String>>;
}

/// Reads history from a `git log --summary --numstat` subprocess.
///
/// git runs inside `workdir`, so a relative path scope is resolved from there.
pub struct GitLog {
    workdir: PathBuf,
    progress: bool,
}

impl GitLog {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn args(scope: &LogScope) -> Vec<String> {
        let mut args: Vec<String> = [
            "log",
            "--no-renames",
            "--summary",
            "--numstat",
            "--format=format:",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        if let Some(since) = &scope.since {
            args.push(format!("--since={since}"));
        }
        if let Some(until) = &scope.until {
            args.push(format!("--until={until}"));
        }
        if !scope.path.is_empty() {
            args.push("--".to_string());
            args.push(scope.path.clone());
        }
        args
    }

    fn spinner(&self) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading git log...");
        pb
    }
}

impl HistorySource for GitLog {
    fn history(&self, scope: &LogScope) -> Result<Vec<String>> {
        let args = Self::args(scope);
        debug!(workdir = %self.workdir.display(), ?args, "spawning git");
        let started = Instant::now();

        let mut child = Command::new("git")
            .args(&args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("git stdout was not captured"))?;

        let pb = self.spinner();
        let mut lines = Vec::new();
        for raw in BufReader::new(stdout).split(b'\n') {
            let raw = match raw {
                Ok(raw) => raw,
                Err(err) => {
                    pb.finish_and_clear();
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(err.into());
                }
            };
            lines.push(String::from_utf8_lossy(&raw).trim_end().to_string());
            if lines.len() % 1024 == 0 {
                pb.inc(1);
            }
        }

        let status = child.wait()?;
        pb.finish_and_clear();
        debug!(
            %status,
            lines = lines.len(),
            elapsed = %humantime::format_duration(started.elapsed()),
            "git log finished"
        );
        if !status.success() {
            return Err(HotError::SourceFailure { status });
        }

        Ok(lines)
    }
}

/// History held in memory, e.g. log text captured earlier.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory {
    lines: Vec<String>,
}

impl StaticHistory {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(|l| l.trim_end().to_string()).collect(),
        }
    }
}

impl HistorySource for StaticHistory {
    fn history(&self, _scope: &LogScope) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
