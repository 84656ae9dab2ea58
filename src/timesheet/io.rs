//! Input acquisition and output delivery around the pure rewrite core.

use crate::clipboard::{copy_to_clipboard, read_from_clipboard};
use crate::error::{Result, TimesheetError};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where raw notes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Clipboard,
}

impl InputSource {
    /// Picks the source from command-line intent.
    ///
    /// Priority: explicit `--paste`, explicit `--stdin` or a `-` path, a file
    /// path, then piped stdin. An interactive terminal with nothing else given
    /// is an error.
    pub fn select(
        path: Option<PathBuf>,
        stdin: bool,
        paste: bool,
        stdin_is_terminal: bool,
    ) -> Result<Self> {
        if paste {
            return Ok(InputSource::Clipboard);
        }
        if stdin || path.as_deref() == Some(Path::new("-")) {
            return Ok(InputSource::Stdin);
        }
        if let Some(path) = path {
            return Ok(InputSource::File(path));
        }
        if !stdin_is_terminal {
            return Ok(InputSource::Stdin);
        }
        Err(TimesheetError::Api(
            "No input: pass a file, pipe text to stdin, or use --paste".to_string(),
        ))
    }

    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => fs::read_to_string(path).map_err(|e| {
                TimesheetError::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            }),
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
            InputSource::Clipboard => read_from_clipboard(),
        }
    }
}

/// Where finished text goes, besides stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTargets {
    pub file: Option<PathBuf>,
    pub clipboard: bool,
}

impl OutputTargets {
    /// Writes `text` to the file target, creating parent directories.
    pub fn write_file(&self, text: &str) -> Result<Option<&Path>> {
        let Some(path) = self.file.as_deref() else {
            return Ok(None);
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, text)?;
        Ok(Some(path))
    }

    pub fn copy(&self, text: &str) -> Result<bool> {
        if !self.clipboard {
            return Ok(false);
        }
        copy_to_clipboard(text)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_wins_over_everything() {
        let src = InputSource::select(Some("notes.txt".into()), true, true, true).unwrap();
        assert_eq!(src, InputSource::Clipboard);
    }

    #[test]
    fn dash_path_means_stdin() {
        let src = InputSource::select(Some("-".into()), false, false, true).unwrap();
        assert_eq!(src, InputSource::Stdin);
    }

    #[test]
    fn file_path_is_used_when_given() {
        let src = InputSource::select(Some("notes.txt".into()), false, false, false).unwrap();
        assert_eq!(src, InputSource::File("notes.txt".into()));
    }

    #[test]
    fn piped_stdin_is_the_fallback() {
        assert_eq!(
            InputSource::select(None, false, false, false).unwrap(),
            InputSource::Stdin
        );
        assert!(InputSource::select(None, false, false, true).is_err());
    }

    #[test]
    fn reading_missing_file_names_the_path() {
        let err = InputSource::File("/definitely/not/here.txt".into())
            .read()
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn write_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports").join("week.txt");
        let targets = OutputTargets {
            file: Some(out.clone()),
            clipboard: false,
        };
        assert_eq!(targets.write_file("done.\n").unwrap(), Some(out.as_path()));
        assert_eq!(fs::read_to_string(&out).unwrap(), "done.\n");
        assert!(!targets.copy("done.\n").unwrap());
    }

    #[test]
    fn no_file_target_writes_nothing() {
        assert_eq!(OutputTargets::default().write_file("x").unwrap(), None);
    }
}
