//! System clipboard access through the platform's command-line tools.
//!
//! - macOS: `pbcopy` / `pbpaste`
//! - Linux: `xclip`, falling back to `xsel`
//! - Windows: `clip` / PowerShell `Get-Clipboard`

use crate::error::{Result, TimesheetError};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard helper program and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "macos")]
const PASTE_TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbpaste",
    args: &[],
}];

#[cfg(target_os = "linux")]
const COPY_TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[cfg(target_os = "linux")]
const PASTE_TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard", "-o"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--output"],
    },
];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "clip",
    args: &[],
}];

#[cfg(target_os = "windows")]
const PASTE_TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "powershell",
    args: &["-NoProfile", "-Command", "Get-Clipboard"],
}];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const COPY_TOOLS: &[ClipboardTool] = &[];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const PASTE_TOOLS: &[ClipboardTool] = &[];

/// Copies `text` to the system clipboard using the first tool that starts.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with(COPY_TOOLS, text)
}

/// Reads the system clipboard as UTF-8 text.
pub fn read_from_clipboard() -> Result<String> {
    paste_with(PASTE_TOOLS)
}

fn no_tools() -> TimesheetError {
    TimesheetError::Clipboard("Clipboard not supported on this platform".to_string())
}

fn tool_names(tools: &[ClipboardTool]) -> String {
    tools
        .iter()
        .map(|t| t.program)
        .collect::<Vec<_>>()
        .join(" or ")
}

pub fn copy_with(tools: &[ClipboardTool], text: &str) -> Result<()> {
    if tools.is_empty() {
        return Err(no_tools());
    }

    let mut child = tools
        .iter()
        .find_map(|tool| {
            Command::new(tool.program)
                .args(tool.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .ok()
        })
        .ok_or_else(|| {
            TimesheetError::Clipboard(format!("Failed to spawn {}", tool_names(tools)))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            TimesheetError::Clipboard(format!("Failed to write to clipboard: {}", e))
        })?;
    }

    let status = child.wait().map_err(|e| {
        TimesheetError::Clipboard(format!("Failed to wait for clipboard command: {}", e))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(TimesheetError::Clipboard(
            "Clipboard command exited with error".to_string(),
        ))
    }
}

pub fn paste_with(tools: &[ClipboardTool]) -> Result<String> {
    if tools.is_empty() {
        return Err(no_tools());
    }

    let output = tools
        .iter()
        .find_map(|tool| {
            Command::new(tool.program)
                .args(tool.args)
                .stdin(Stdio::null())
                .output()
                .ok()
                .filter(|out| out.status.success())
        })
        .ok_or_else(|| {
            TimesheetError::Clipboard(format!("Failed to read clipboard via {}", tool_names(tools)))
        })?;

    String::from_utf8(output.stdout)
        .map_err(|e| TimesheetError::Clipboard(format!("Invalid UTF-8 in clipboard: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &[ClipboardTool] = &[ClipboardTool {
        program: "timesheet-no-such-clipboard-tool",
        args: &[],
    }];

    #[test]
    fn no_tools_is_unsupported() {
        let err = copy_with(&[], "x").unwrap_err();
        assert!(err.to_string().contains("not supported"));
        assert!(paste_with(&[]).is_err());
    }

    #[test]
    fn missing_tool_is_a_clipboard_error() {
        let err = copy_with(MISSING, "x").unwrap_err();
        assert!(matches!(err, TimesheetError::Clipboard(_)));
        assert!(err.to_string().contains("timesheet-no-such-clipboard-tool"));
        assert!(matches!(paste_with(MISSING), Err(TimesheetError::Clipboard(_))));
    }

    #[cfg(unix)]
    #[test]
    fn paste_reads_tool_stdout() {
        const ECHO: &[ClipboardTool] = &[ClipboardTool {
            program: "echo",
            args: &["- toner low - TCG"],
        }];
        assert_eq!(paste_with(ECHO).unwrap(), "- toner low - TCG\n");
    }

    #[cfg(unix)]
    #[test]
    fn copy_feeds_tool_stdin() {
        const CAT: &[ClipboardTool] = &[ClipboardTool {
            program: "cat",
            args: &[],
        }];
        assert!(copy_with(CAT, "Fixed it. – NR\n").is_ok());
    }
}
