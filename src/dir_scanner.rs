use crate::cli::SourceKind;
use crate::error::SourceError;
use ignore::WalkBuilder;
use std::ffi::{OsStr, OsString};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A finite stream of directory paths below a search root.
///
/// Implementations call `sink` once per directory and report whether the
/// enumeration as a whole succeeded.
pub trait DirectoryStream {
    fn for_each_dir(&mut self, sink: &mut dyn FnMut(PathBuf)) -> Result<(), SourceError>;
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub max_depth: usize,
    pub ignore_names: Vec<String>,
    pub respect_gitignore: bool,
}

pub fn directory_stream(kind: SourceKind, options: ScanOptions) -> Box<dyn DirectoryStream> {
    match kind {
        SourceKind::Find => Box::new(FindSource::new(options)),
        SourceKind::Walk => Box::new(WalkSource::new(options)),
    }
}

/// Streams directories from a `find(1)` child process.
pub struct FindSource {
    options: ScanOptions,
}

impl FindSource {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            self.options.root.clone().into_os_string(),
            "-maxdepth".into(),
            self.options.max_depth.to_string().into(),
            "-mindepth".into(),
            "1".into(),
        ];

        if !self.options.ignore_names.is_empty() {
            args.push("(".into());
            for (i, name) in self.options.ignore_names.iter().enumerate() {
                if i > 0 {
                    args.push("-o".into());
                }
                args.push("-name".into());
                args.push(name.into());
            }
            args.push(")".into());
            args.push("-prune".into());
            args.push("-o".into());
        }

        args.extend(["-type", "d", "-print"].map(OsString::from));
        args
    }
}

impl DirectoryStream for FindSource {
    fn for_each_dir(&mut self, sink: &mut dyn FnMut(PathBuf)) -> Result<(), SourceError> {
        let mut child = Command::new("find")
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(SourceError::Spawn)?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SourceError::Io(std::io::Error::other(
                "find stdout was not captured",
            )));
        };

        let mut yielded = 0usize;
        for line in BufReader::new(stdout).split(b'\n') {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SourceError::Io(e));
                }
            };
            if line.is_empty() {
                continue;
            }
            sink(path_from_bytes(line));
            yielded += 1;
        }

        let status = child.wait()?;
        tracing::debug!(yielded, ?status, "find finished");
        if !status.success() {
            return Err(SourceError::Failed {
                code: status.code(),
            });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    let text = String::from_utf8_lossy(&bytes);
    PathBuf::from(text.trim_end_matches('\r'))
}

/// Walks the tree in-process with the `ignore` crate.
pub struct WalkSource {
    options: ScanOptions,
}

impl WalkSource {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }
}

impl DirectoryStream for WalkSource {
    fn for_each_dir(&mut self, sink: &mut dyn FnMut(PathBuf)) -> Result<(), SourceError> {
        let root: &Path = &self.options.root;
        let pruned = self.options.ignore_names.clone();

        let mut walker = WalkBuilder::new(root);
        walker
            .standard_filters(self.options.respect_gitignore)
            .hidden(false)
            .follow_links(false)
            .max_depth(Some(self.options.max_depth))
            .filter_entry(move |entry| {
                entry.depth() == 0 || !is_pruned(entry.file_name(), &pruned)
            });

        let mut yielded = 0usize;
        for result in walker.build() {
            let entry = match result {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }

            sink(entry.into_path());
            yielded += 1;
        }

        tracing::debug!(yielded, root = %root.display(), "walk finished");
        Ok(())
    }
}

/// True when `name` is one of the pruned directory names.
pub fn is_pruned(name: &OsStr, ignore_names: &[String]) -> bool {
    ignore_names.iter().any(|pruned| name == OsStr::new(pruned))
}
