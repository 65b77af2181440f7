//! Directory browsing primitives for kupo.
//!
//! Provides the FileEntry struct used by every pane and the browse_dir
//! enumerator that produces them.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// A single entry in a directory listing.
///
/// Holds the file name and packed attribute flags. The absolute path of an
/// entry is always derived by joining the owning pane's source directory
/// with the entry name.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    flags: u8,
}

impl FileEntry {
    // Flag bit definitions
    pub(super) const IS_DIR: u8 = 1 << 0;
    pub(super) const IS_HIDDEN: u8 = 1 << 1;
    pub(super) const IS_SYMLINK: u8 = 1 << 2;

    pub fn new(name: OsString, flags: u8) -> Self {
        FileEntry {
            name: name.into_boxed_os_str(),
            flags,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn lowercase_name(&self) -> String {
        self.name.to_string_lossy().to_lowercase()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }
}

/// Reads the contents of the provided directory into a vector of FileEntry.
///
/// Entries that fail to stat are skipped rather than failing the whole
/// listing. Symlinks are resolved once so that links to directories still
/// count as directories for navigation.
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let mut flags = 0u8;
        if ft.is_dir() {
            flags |= FileEntry::IS_DIR;
        }
        if ft.is_symlink() {
            flags |= FileEntry::IS_SYMLINK;
            // Follow the link once, so symlinked directories navigate as directories.
            if let Ok(md) = fs::metadata(entry.path())
                && md.is_dir()
            {
                flags |= FileEntry::IS_DIR;
            }
        }

        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            if name.as_bytes().first() == Some(&b'.') {
                flags |= FileEntry::IS_HIDDEN;
            }
        }

        #[cfg(windows)]
        {
            use std::os::windows::fs::MetadataExt;
            if let Ok(md) = entry.metadata()
                && md.file_attributes() & 0x2 != 0
            {
                flags |= FileEntry::IS_HIDDEN;
            }
        }

        entries.push(FileEntry::new(name, flags));
    }
    Ok(entries)
}
