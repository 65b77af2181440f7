//! Sorting, filtering, and display formatting for file entries in kupo.
//!
//! The [Formatter] struct holds the rules for sorting and filtering entries,
//! based on user preferences from the kupo.toml configuration. It prepares
//! file lists for display in each pane.
//!
//! Also holds the bounded preview readers used by the preview worker and the
//! directory-summary preview.

use crate::core::{FileEntry, browse_dir};

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use unicode_width::UnicodeWidthChar;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::SystemTime;

/// Byte budget for a single file preview read. The preview shows at most
/// this much of a file so that preview latency stays independent of file
/// size.
pub const PREVIEW_BYTE_BUDGET: usize = 2048;

/// Formatter to handle sorting and filtering of file entries based on user
/// preferences.
pub struct Formatter {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
}

impl Formatter {
    pub fn new(dirs_first: bool, show_hidden: bool, case_insensitive: bool) -> Self {
        Self {
            dirs_first,
            show_hidden,
            case_insensitive,
        }
    }

    /// Sorts the given file entries in place according to the formatter's settings.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(|a, b| {
            if self.dirs_first {
                match (a.is_dir(), b.is_dir()) {
                    (true, false) => return std::cmp::Ordering::Less,
                    (false, true) => return std::cmp::Ordering::Greater,
                    _ => {}
                }
            }
            if self.case_insensitive {
                a.lowercase_name().cmp(&b.lowercase_name())
            } else {
                a.name_str().cmp(&b.name_str())
            }
        });
    }

    /// Filters the given file entries in place according to the formatter's settings.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        entries.retain(|e| self.show_hidden || !e.is_hidden());
        self.sort_entries(entries);
    }
}

/// Truncates/pads a line so its display width is exactly `pane_width`.
///
/// Tabs expand to the next 4-column stop, control characters are stripped,
/// and wide characters never straddle the pane edge.
pub fn sanitize_to_exact_width(line: &str, pane_width: usize) -> String {
    let mut out = String::with_capacity(pane_width);
    let mut current_w = 0;

    for char in line.chars() {
        if char == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > pane_width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if char.is_control() {
            continue;
        }

        let w = char.width().unwrap_or(0);
        if current_w + w > pane_width {
            break;
        }

        out.push(char);
        current_w += w;
    }

    if current_w < pane_width {
        out.push_str(&" ".repeat(pane_width - current_w));
    }

    out
}

/// Formats a file size into a human-readable string, "-" for directories
/// and unknown sizes.
pub fn format_file_size(size: Option<u64>, is_dir: bool) -> String {
    if is_dir {
        "-".into()
    } else if let Some(sz) = size {
        format_size(sz, DECIMAL)
    } else {
        "-".to_string()
    }
}

/// Formats a file modification time into a human-readable string, "-" if
/// unknown.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%Y-%m-%d %H:%M").to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Builds the preview header line for a file: name, size and mtime.
pub fn file_stamp_line(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match std::fs::metadata(path) {
        Ok(meta) => {
            let size = format_file_size(Some(meta.len()), meta.is_dir());
            let time = format_file_time(meta.modified().ok());
            format!("{name}  {size}  {time}")
        }
        Err(_) => name,
    }
}

/// Loads a fixed-width directory summary preview.
///
/// Directories are suffixed with a separator, listings longer than
/// `max_lines` end in an ellipsis line, and an unreadable directory becomes
/// a single error line.
pub fn preview_directory(path: &Path, max_lines: usize, pane_width: usize) -> Vec<String> {
    let max_lines = max_lines.max(1);
    match browse_dir(path) {
        Ok(entries) => {
            let mut lines = Vec::with_capacity(max_lines);
            let total_entries = entries.len();

            for e in entries.iter().take(max_lines) {
                let display_name = if e.is_dir() {
                    e.name().to_string_lossy().clone() + "/"
                } else {
                    e.name().to_string_lossy().clone()
                };
                lines.push(sanitize_to_exact_width(&display_name, pane_width));
            }

            if lines.is_empty() {
                lines.push(sanitize_to_exact_width("[empty directory]", pane_width));
            } else if total_entries > max_lines
                && let Some(last) = lines.last_mut()
            {
                *last = sanitize_to_exact_width("...", pane_width);
            }

            lines
        }
        Err(e) => {
            let err_msg = "[Error: ".to_owned() + &e.to_string() + "]";
            vec![sanitize_to_exact_width(&err_msg, pane_width)]
        }
    }
}

/// Reads a bounded preview from a file.
///
/// At most [PREVIEW_BYTE_BUDGET] bytes are read. A null byte inside the
/// window classifies the file as binary. The returned lines are sanitized
/// to the pane width; a partially read trailing line is kept as-is.
pub fn read_file_preview(path: &Path, max_lines: usize, pane_width: usize) -> io::Result<Vec<String>> {
    let mut file = File::open(path)?;

    let mut buffer = vec![0u8; PREVIEW_BYTE_BUDGET];
    let mut filled = 0;
    // A single read may return short; keep going until the budget or EOF.
    loop {
        let n = file.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == buffer.len() {
            break;
        }
    }
    buffer.truncate(filled);

    if buffer.contains(&0) {
        return Ok(vec![sanitize_to_exact_width(
            "[binary file - preview hidden]",
            pane_width,
        )]);
    }

    let text = String::from_utf8_lossy(&buffer);
    let mut lines: Vec<String> = text
        .lines()
        .take(max_lines.max(1))
        .map(|l| sanitize_to_exact_width(l, pane_width))
        .collect();

    if lines.is_empty() {
        lines.push(sanitize_to_exact_width("[empty file]", pane_width));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::tempdir;

    fn entry(name: &str, dir: bool) -> FileEntry {
        let flags = if dir { 1 } else { 0 };
        FileEntry::new(OsString::from(name), flags)
    }

    #[test]
    fn sorts_dirs_first_case_insensitive() {
        let fmt = Formatter::new(true, true, true);
        let mut entries = vec![
            entry("zeta.txt", false),
            entry("Alpha", true),
            entry("beta.txt", false),
            entry("gamma", true),
        ];
        fmt.sort_entries(&mut entries);

        let names: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec!["Alpha", "gamma", "beta.txt", "zeta.txt"]);
    }

    #[test]
    fn filters_hidden_entries() {
        let fmt = Formatter::new(true, false, true);
        let mut entries = vec![
            FileEntry::new(OsString::from(".git"), 1 | 2),
            entry("src", true),
        ];
        fmt.filter_entries(&mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name_str(), "src");
    }

    #[test]
    fn preview_read_is_bounded() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let big = tmp.path().join("big.txt");
        let line = "x".repeat(63) + "\n";
        fs::write(&big, line.repeat(1000))?;

        let lines = read_file_preview(&big, 1000, 80)?;
        // 2048 bytes / 64 bytes per line
        assert_eq!(lines.len(), PREVIEW_BYTE_BUDGET / 64);
        Ok(())
    }

    #[test]
    fn preview_detects_binary() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let bin = tmp.path().join("blob.bin");
        fs::write(&bin, [0x7fu8, b'E', b'L', b'F', 0x00, 0x01])?;

        let lines = read_file_preview(&bin, 10, 40)?;
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("binary file"));
        Ok(())
    }

    #[test]
    fn preview_empty_file_placeholder() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let empty = tmp.path().join("empty.txt");
        fs::write(&empty, "")?;

        let lines = read_file_preview(&empty, 10, 40)?;
        assert!(lines[0].contains("[empty file]"));
        Ok(())
    }

    #[test]
    fn directory_preview_marks_dirs_and_truncates() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        fs::create_dir(tmp.path().join("sub"))?;
        for i in 0..5 {
            fs::write(tmp.path().join(format!("f{i}.txt")), "")?;
        }

        let lines = preview_directory(tmp.path(), 3, 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.last().map(|l| l.trim_end()), Some("..."));
        Ok(())
    }

    #[test]
    fn sanitize_exact_width() {
        for input in ["short.txt", "very_long_filename.txt", "🦀_crab.rs", "\t_tab"] {
            let out = sanitize_to_exact_width(input, 10);
            assert_eq!(unicode_width::UnicodeWidthStr::width(out.as_str()), 10);
        }
    }
}
