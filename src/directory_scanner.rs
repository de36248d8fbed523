// SPDX-License-Identifier: MPL-2.0
//! Folder listing: the supported images of one directory, sorted, with a
//! cursor on the image being viewed.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Sorted image paths of a single directory and the position of the current one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    directory: Option<PathBuf>,
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
    /// Without a cursor, navigation continues from the gap before this index.
    resume_at: usize,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists the directory containing `current_file` and points the cursor at it.
    ///
    /// Relative paths are resolved against the working directory, so the
    /// listing always holds absolute paths.
    ///
    /// A file that has vanished from disk still yields a listing; the cursor is
    /// then `None` and, for alphabetical order, navigation resumes from where
    /// the file used to sort.
    pub fn scan_directory(current_file: &Path, sort_order: SortOrder) -> Result<Self> {
        let current_file = std::path::absolute(current_file)?;
        let parent = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let mut list = Self::scan_directory_direct(parent, sort_order)?;
        list.current_index = list.image_files.iter().position(|p| *p == current_file);
        if list.current_index.is_none() && sort_order == SortOrder::Alphabetical {
            let name = current_file.file_name();
            let gap = list.image_files.partition_point(|p| p.file_name() < name);
            list.resume_at(gap);
        }
        Ok(list)
    }

    /// Lists `directory` and points the cursor at its first image, if any.
    pub fn scan_directory_direct(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);

        let current_index = (!image_files.is_empty()).then_some(0);

        Ok(Self {
            directory: Some(directory.to_path_buf()),
            image_files,
            current_index,
            resume_at: 0,
        })
    }

    /// Directory this listing was built from.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn first(&self) -> Option<&Path> {
        self.image_files.first().map(PathBuf::as_path)
    }

    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.image_files.get(idx))
            .map(PathBuf::as_path)
    }

    /// The image `skip_count + 1` positions after the cursor, wrapping around.
    ///
    /// Without a cursor, `skip_count = 0` yields the image after the gap
    /// (the first image unless [`ImageList::resume_at`] moved it).
    pub fn peek_nth_next(&self, skip_count: usize) -> Option<&Path> {
        let len = self.image_files.len();
        if len == 0 {
            return None;
        }

        let index = match self.current_index {
            Some(idx) => (idx + (skip_count + 1) % len) % len,
            None => (self.resume_at + skip_count % len) % len,
        };
        self.image_files.get(index).map(PathBuf::as_path)
    }

    /// The image `skip_count + 1` positions before the cursor, wrapping around.
    ///
    /// Without a cursor, `skip_count = 0` yields the image before the gap
    /// (the last image unless [`ImageList::resume_at`] moved it).
    pub fn peek_nth_previous(&self, skip_count: usize) -> Option<&Path> {
        let len = self.image_files.len();
        if len == 0 {
            return None;
        }

        let offset = (skip_count + 1) % len;
        let index = match self.current_index {
            Some(idx) => (idx + len - offset) % len,
            None => (self.resume_at + len - offset) % len,
        };
        self.image_files.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Moves the cursor to `path`, or clears it when `path` is not listed.
    pub fn set_current(&mut self, path: &Path) {
        self.current_index = self.image_files.iter().position(|p| p == path);
        self.resume_at = 0;
    }

    pub fn clear_current(&mut self) {
        self.current_index = None;
        self.resume_at = 0;
    }

    /// Without a cursor, makes next start at `index` and previous at `index - 1`.
    ///
    /// Used when the current image vanished: `index` is where it used to be.
    /// Has no effect while a cursor is set.
    pub fn resume_at(&mut self, index: usize) {
        if self.current_index.is_none() {
            self.resume_at = index.min(self.image_files.len());
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }
}

fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_cached_key(|path| {
                let time = path
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (time, path.file_name().map(|n| n.to_os_string()))
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_cached_key(|path| {
                let time = path
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (time, path.file_name().map(|n| n.to_os_string()))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_keeps_only_supported_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_file(temp_dir.path(), "a.jpg");
        create_file(temp_dir.path(), "b.PNG");
        create_file(temp_dir.path(), "c.ico");
        create_file(temp_dir.path(), "notes.txt");
        create_file(temp_dir.path(), "clip.mp4");
        fs::create_dir(temp_dir.path().join("folder.png")).expect("create dir");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 3);
        assert_eq!(list.current(), Some(img1.as_path()));
        assert_eq!(list.directory(), Some(temp_dir.path()));
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_file(temp_dir.path(), "c.jpg");
        let img_a = create_file(temp_dir.path(), "a.jpg");
        let img_b = create_file(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(&img_b, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.image_files, vec![img_a, img_b, img_c]);
        assert_eq!(list.current_index(), Some(1));
    }

    #[test]
    fn next_wraps_around_to_first_and_previous_to_last() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_file(temp_dir.path(), "a.jpg");
        create_file(temp_dir.path(), "b.jpg");
        let img3 = create_file(temp_dir.path(), "c.jpg");

        let at_last = ImageList::scan_directory(&img3, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert_eq!(at_last.peek_nth_next(0), Some(img1.as_path()));

        let at_first = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert_eq!(at_first.peek_nth_previous(0), Some(img3.as_path()));
    }

    #[test]
    fn peek_nth_wraps_past_list_length() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_file(temp_dir.path(), "a.jpg");
        let img2 = create_file(temp_dir.path(), "b.jpg");
        let img3 = create_file(temp_dir.path(), "c.jpg");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.peek_nth_next(1), Some(img3.as_path()));
        assert_eq!(list.peek_nth_next(2), Some(img1.as_path()));
        assert_eq!(list.peek_nth_next(3), Some(img2.as_path()));
        assert_eq!(list.peek_nth_previous(1), Some(img2.as_path()));
        assert_eq!(list.peek_nth_previous(4), Some(img2.as_path()));
    }

    #[test]
    fn missing_current_file_leaves_cursor_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_file(temp_dir.path(), "a.jpg");
        let img2 = create_file(temp_dir.path(), "b.jpg");
        let gone = temp_dir.path().join("gone.jpg");

        let list = ImageList::scan_directory(&gone, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert!(list.current().is_none());
        assert_eq!(list.peek_nth_next(0), Some(img1.as_path()));
        assert_eq!(list.peek_nth_previous(0), Some(img2.as_path()));
    }

    #[test]
    fn vanished_current_file_resumes_between_its_neighbours() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let files: Vec<PathBuf> = ["a.png", "b.png", "d.png", "e.png"]
            .iter()
            .map(|name| create_file(temp_dir.path(), name))
            .collect();
        let gone = temp_dir.path().join("c.png");

        let list = ImageList::scan_directory(&gone, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert!(list.current().is_none());
        assert_eq!(list.peek_nth_next(0), Some(files[2].as_path()));
        assert_eq!(list.peek_nth_next(1), Some(files[3].as_path()));
        assert_eq!(list.peek_nth_previous(0), Some(files[1].as_path()));
        assert_eq!(list.peek_nth_previous(1), Some(files[0].as_path()));
    }

    #[test]
    fn vanished_last_file_wraps_next_to_first() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_file(temp_dir.path(), "a.png");
        let second = create_file(temp_dir.path(), "b.png");
        let gone = temp_dir.path().join("z.png");

        let list = ImageList::scan_directory(&gone, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.peek_nth_next(0), Some(first.as_path()));
        assert_eq!(list.peek_nth_previous(0), Some(second.as_path()));
    }

    #[test]
    fn resume_at_is_ignored_while_a_cursor_is_set() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_file(temp_dir.path(), "a.png");
        let second = create_file(temp_dir.path(), "b.png");
        create_file(temp_dir.path(), "c.png");

        let mut list = ImageList::scan_directory(&first, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        list.resume_at(2);
        assert_eq!(list.peek_nth_next(0), Some(second.as_path()));
    }

    #[test]
    fn bare_file_name_lists_the_working_directory() {
        let _guard = crate::app::paths::ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "a.png");
        create_file(temp_dir.path(), "b.png");

        let previous_dir = std::env::current_dir().expect("current dir");
        std::env::set_current_dir(temp_dir.path()).expect("enter temp dir");
        let working_dir = std::env::current_dir().expect("current dir");
        let result = ImageList::scan_directory(Path::new("a.png"), SortOrder::Alphabetical);
        std::env::set_current_dir(previous_dir).expect("restore current dir");

        let list = result.expect("bare file name should scan");
        assert_eq!(list.len(), 2);
        assert_eq!(list.directory(), Some(working_dir.as_path()));
        assert_eq!(list.current(), Some(working_dir.join("a.png").as_path()));
        assert_eq!(list.peek_nth_next(0), Some(working_dir.join("b.png").as_path()));
    }

    #[test]
    fn scan_directory_direct_starts_at_first_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "z.png");
        let first = create_file(temp_dir.path(), "m.png");

        let list = ImageList::scan_directory_direct(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.current(), Some(first.as_path()));
        assert_eq!(list.first(), Some(first.as_path()));
    }

    #[test]
    fn scan_directory_direct_on_empty_folder() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "readme.md");

        let list = ImageList::scan_directory_direct(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert!(list.is_empty());
        assert!(list.current().is_none());
        assert!(list.peek_nth_next(0).is_none());
        assert!(list.peek_nth_previous(0).is_none());
    }

    #[test]
    fn scan_missing_directory_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result =
            ImageList::scan_directory_direct(&temp_dir.path().join("nope"), SortOrder::Alphabetical);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn single_image_navigates_to_itself() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let only = create_file(temp_dir.path(), "only.jpg");

        let list = ImageList::scan_directory(&only, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.peek_nth_next(0), Some(only.as_path()));
        assert_eq!(list.peek_nth_previous(0), Some(only.as_path()));
    }

    #[test]
    fn set_current_moves_cursor() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_file(temp_dir.path(), "a.jpg");
        let img2 = create_file(temp_dir.path(), "b.jpg");

        let mut list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        list.set_current(&img2);
        assert_eq!(list.current(), Some(img2.as_path()));
        assert_eq!(list.current_index(), Some(1));
        assert_eq!(list.peek_nth_next(0), Some(img1.as_path()));

        list.set_current(Path::new("/elsewhere/x.png"));
        assert!(list.current().is_none());
    }

    #[test]
    fn modified_date_sort_orders_by_mtime() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let older = create_file(temp_dir.path(), "b.jpg");
        let newer = create_file(temp_dir.path(), "a.jpg");

        let base = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
        fs::File::options()
            .write(true)
            .open(&older)
            .and_then(|f| f.set_modified(base))
            .expect("set mtime");
        fs::File::options()
            .write(true)
            .open(&newer)
            .and_then(|f| f.set_modified(base + std::time::Duration::from_secs(60)))
            .expect("set mtime");

        let list = ImageList::scan_directory_direct(temp_dir.path(), SortOrder::ModifiedDate)
            .expect("failed to scan directory");
        assert_eq!(list.image_files, vec![older, newer]);
    }
}
