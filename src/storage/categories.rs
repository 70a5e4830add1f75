//! Category repository for JSON storage
//!
//! Manages loading and saving the category list to categories.json. The file
//! is a plain array of `{ "name", "type" }` objects kept in insertion order.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Kind};

use super::file_io::{quarantine_file, read_json, write_json_atomic};

/// Repository for category persistence
#[derive(Debug)]
pub struct CategoryStore {
    path: PathBuf,
    categories: Vec<Category>,
    strict: bool,
}

impl CategoryStore {
    /// Create a new, empty category store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: Vec::new(),
            strict: false,
        }
    }

    /// Enable rejection of empty and duplicate names in [`add`](Self::add)
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load categories, reporting an unreadable file as an error
    ///
    /// A missing file initializes an empty list and writes it back.
    pub fn try_load(&mut self) -> FinanceResult<()> {
        match read_json::<Vec<Category>, _>(&self.path)? {
            Some(categories) => {
                debug!(path = %self.path.display(), count = categories.len(), "loaded categories");
                self.categories = categories;
            }
            None => {
                info!(path = %self.path.display(), "categories file not found, creating a new one");
                self.categories.clear();
                self.save()?;
            }
        }
        Ok(())
    }

    /// Load categories, recovering from an unreadable file with an empty list
    ///
    /// The unreadable file is copied to `<name>.corrupt` before anything can
    /// overwrite it.
    pub fn load(&mut self) -> FinanceResult<()> {
        match self.try_load() {
            Err(FinanceError::DataCorruption { path, message }) => {
                warn!(path = %path.display(), error = %message, "categories file is unreadable, starting empty");
                match quarantine_file(&path) {
                    Ok(copy) => warn!(copy = %copy.display(), "kept a copy of the unreadable categories file"),
                    Err(e) => warn!(error = %e, "could not keep a copy of the unreadable categories file"),
                }
                self.categories.clear();
                Ok(())
            }
            other => other,
        }
    }

    /// Save categories to disk
    pub fn save(&self) -> FinanceResult<()> {
        write_json_atomic(&self.path, &self.categories)?;
        debug!(path = %self.path.display(), count = self.categories.len(), "saved categories");
        Ok(())
    }

    /// Append a category and persist; returns its position
    pub fn add(&mut self, name: &str, kind: Kind) -> FinanceResult<usize> {
        let category = Category::new(name, kind);

        if self.strict {
            category
                .validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;

            if self.categories.iter().any(|c| c.name.trim() == name.trim()) {
                return Err(FinanceError::Duplicate {
                    entity_type: "Category",
                    identifier: name.to_string(),
                });
            }
        }

        self.categories.push(category);
        if let Err(e) = self.save() {
            self.categories.pop();
            return Err(e);
        }

        info!(name, %kind, "added category");
        Ok(self.categories.len() - 1)
    }

    /// Delete the category at `index` and persist; returns the removed category
    ///
    /// Events referring to the category by name are not affected.
    pub fn remove(&mut self, index: usize) -> FinanceResult<Category> {
        if index >= self.categories.len() {
            return Err(FinanceError::category_index(index, self.categories.len()));
        }

        let removed = self.categories.remove(index);
        if let Err(e) = self.save() {
            self.categories.insert(index, removed);
            return Err(e);
        }

        info!(name = %removed.name, index, "removed category");
        Ok(removed)
    }

    /// All categories in insertion order
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Categories of one kind with their positions, for an entry selector
    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = (usize, &Category)> + '_ {
        self.categories
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.kind == kind)
    }

    /// First category with exactly this name
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Kind of the first category with this name
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.find(name).map(|c| c.kind)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
