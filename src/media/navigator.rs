// SPDX-License-Identifier: MPL-2.0
//! Folder navigation state shared by the viewer and the save flow.
//!
//! Navigation is pessimistic: callers peek at a target, load it, and only
//! confirm the move once the image decoded. A failed load leaves the current
//! image and cursor untouched.

use crate::config::SortOrder;
use crate::directory_scanner::ImageList;
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Snapshot of the listing for rendering the position indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    pub current_index: Option<usize>,
    pub total_count: usize,
}

impl NavigationInfo {
    /// Navigation buttons are useful once anything is listed.
    pub fn can_navigate(&self) -> bool {
        self.total_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageNavigator {
    image_list: ImageList,
    current_image_path: Option<PathBuf>,
}

impl ImageNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists the folder of `current_file` and makes it the current image.
    ///
    /// A relative `current_file` is resolved against the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(&mut self, current_file: &Path, sort_order: SortOrder) -> Result<()> {
        let current_file = std::path::absolute(current_file)?;
        self.image_list = ImageList::scan_directory(&current_file, sort_order)?;
        self.current_image_path = Some(current_file);
        Ok(())
    }

    /// Lists `directory` and returns its first image without selecting it.
    ///
    /// The current image only changes once the caller confirms it loaded.
    /// Returns `Ok(None)` when the folder holds no supported image.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_from_directory(
        &mut self,
        directory: &Path,
        sort_order: SortOrder,
    ) -> Result<Option<PathBuf>> {
        let mut list = ImageList::scan_directory_direct(directory, sort_order)?;
        let first = list.first().map(Path::to_path_buf);
        if first.is_some() {
            list.clear_current();
            self.image_list = list;
            self.current_image_path = None;
        }
        Ok(first)
    }

    /// Re-lists the current folder so files added or removed since the last
    /// scan are honoured. The cursor stays on the current image.
    ///
    /// If the current image was deleted, next and previous continue from the
    /// place it occupied rather than from the ends of the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn rescan(&mut self, sort_order: SortOrder) -> Result<()> {
        let directory = self.image_list.directory().map(Path::to_path_buf);
        match (self.current_image_path.clone(), directory) {
            (Some(current), _) => {
                let previous_index = self.image_list.current_index();
                let mut list = ImageList::scan_directory(&current, sort_order)?;
                // Date orders cannot place a deleted file by its key.
                if sort_order != SortOrder::Alphabetical {
                    if let Some(index) = previous_index {
                        list.resume_at(index);
                    }
                }
                self.image_list = list;
            }
            (None, Some(directory)) => {
                self.image_list = ImageList::scan_directory_direct(&directory, sort_order)?;
                self.image_list.clear_current();
            }
            (None, None) => {}
        }
        Ok(())
    }

    #[must_use]
    pub fn current_image_path(&self) -> Option<&Path> {
        self.current_image_path.as_deref()
    }

    /// Folder the listing was built from.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.image_list.directory()
    }

    /// Whether `path` lives in the listed folder.
    #[must_use]
    pub fn is_in_current_directory(&self, path: &Path) -> bool {
        match (self.directory(), path.parent()) {
            (Some(directory), Some(parent)) => directory == parent,
            _ => false,
        }
    }

    #[must_use]
    pub fn peek_next(&self) -> Option<PathBuf> {
        self.peek_nth(Direction::Next, 0)
    }

    #[must_use]
    pub fn peek_previous(&self) -> Option<PathBuf> {
        self.peek_nth(Direction::Previous, 0)
    }

    /// Target after skipping `skip_count` unreadable files in `direction`.
    #[must_use]
    pub fn peek_nth(&self, direction: Direction, skip_count: usize) -> Option<PathBuf> {
        let path = match direction {
            Direction::Next => self.image_list.peek_nth_next(skip_count),
            Direction::Previous => self.image_list.peek_nth_previous(skip_count),
        };
        path.map(Path::to_path_buf)
    }

    /// Makes `path` the current image after it loaded successfully.
    pub fn confirm_navigation(&mut self, path: &Path) {
        self.image_list.set_current(path);
        self.current_image_path = Some(path.to_path_buf());
    }

    /// Forgets the current image, keeping the listing.
    pub fn clear_current(&mut self) {
        self.current_image_path = None;
        self.image_list.clear_current();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.image_list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_list.is_empty()
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.image_list.current_index(),
            total_count: self.image_list.len(),
        }
    }
}
