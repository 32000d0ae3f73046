#[cfg(test)]
mod tests;

use {
    crate::formats::is_image_file,
    bstr::ByteSlice,
    isnt::std_1::vec::IsntVecExt,
    std::{
        fs, io,
        os::unix::ffi::OsStrExt,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("The file does not exist")]
    FileNotFound(#[source] io::Error),
    #[error("Could not read the directory")]
    ReadDir(#[source] io::Error),
}

/// Walks the images in the directory of the file the viewer was opened
/// with, in natural name order, wrapping at both ends.
pub struct Navigator {
    files: Vec<PathBuf>,
    current: PathBuf,
    index: usize,
}

impl Navigator {
    pub fn new(path: &Path) -> Result<Self, NavigatorError> {
        fs::metadata(path).map_err(NavigatorError::FileNotFound)?;
        let dir = parent_dir(path);
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(NavigatorError::ReadDir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                log::debug!(
                    "skipping file with non-utf8 name {}",
                    name.as_bytes().as_bstr(),
                );
                continue;
            };
            let entry_path = dir.join(name);
            if !is_image_file(&entry_path) {
                continue;
            }
            if !entry.metadata().map(|m| m.is_file()).unwrap_or(false) {
                continue;
            }
            entries.push((name.to_string(), entry_path));
        }
        entries.sort_by(|a, b| numeric_sort::cmp(&a.0, &b.0));
        let files: Vec<_> = entries.into_iter().map(|e| e.1).collect();
        let name = path.file_name();
        let (current, index) = match files.iter().position(|f| f.file_name() == name) {
            Some(index) => (files[index].clone(), index),
            // The file is not part of the filtered listing. Show it anyway
            // and start navigation at the front.
            None => (path.to_path_buf(), 0),
        };
        Ok(Self {
            files,
            current,
            index,
        })
    }

    pub fn next(&mut self) -> &Path {
        self.advance(1)
    }

    pub fn prev(&mut self) -> &Path {
        self.advance(-1)
    }

    fn advance(&mut self, delta: isize) -> &Path {
        if self.files.is_not_empty() {
            let n = self.files.len() as isize;
            self.index = (self.index as isize + delta).rem_euclid(n) as usize;
            self.current = self.files[self.index].clone();
        }
        &self.current
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Zero-based position and total count.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.files.len())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
