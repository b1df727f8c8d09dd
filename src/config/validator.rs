//! Structural validation of a keybinding tree
//!
//! Validation never fails and never mutates: it returns every problem found,
//! each tagged with the path of the offending item, in traversal order.
//! A tree with errors is still navigable; see `NavigationController` for how
//! duplicate keys resolve.

use std::collections::HashMap;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use super::tree::{Action, Group, KeyItem, Path};
use crate::keys::glyphs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorType {
    /// Missing or empty key on a non-root item
    EmptyKey,
    /// Key longer than one character
    NonSingleCharacterKey,
    /// Key shared with at least one sibling
    DuplicateKey,
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorType::EmptyKey => write!(f, "empty key"),
            ValidationErrorType::NonSingleCharacterKey => write!(f, "non-single-character key"),
            ValidationErrorType::DuplicateKey => write!(f, "duplicate key"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub error_type: ValidationErrorType,
    pub path: Path,
    pub message: String,
}

impl ValidationError {
    fn new(error_type: ValidationErrorType, path: Path, message: String) -> Self {
        Self {
            error_type,
            path,
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.path, self.message)
    }
}

/// Validate the children of `root`, recursively
///
/// For each group, before descending: empty and over-long keys in child
/// order, then duplicate keys (every participant is reported), then each
/// child group in array order. The root's own key is not checked.
///
/// Duplicates are found on the normalized glyph, the same form navigation
/// matches on, so `" "` and `"␣"` collide.
pub fn validate(root: &Group) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut path = Vec::new();
    validate_group(root, &mut path, &mut errors);
    tracing::debug!("Validated config: {} error(s)", errors.len());
    errors
}

fn validate_group(group: &Group, path: &mut Path, errors: &mut Vec<ValidationError>) {
    let mut by_key: HashMap<&str, Vec<usize>> = HashMap::new();

    for (idx, item) in group.actions.iter().enumerate() {
        let key = item.key().unwrap_or_default();
        let length = key.graphemes(true).count();

        if length == 0 {
            errors.push(ValidationError::new(
                ValidationErrorType::EmptyKey,
                child_path(path, idx),
                "Key is required".to_string(),
            ));
        } else if length > 1 {
            errors.push(ValidationError::new(
                ValidationErrorType::NonSingleCharacterKey,
                child_path(path, idx),
                format!("Key must be a single character, found \"{}\"", key),
            ));
        } else {
            by_key.entry(glyphs::normalize(key)).or_default().push(idx);
        }
    }

    for (idx, item) in group.actions.iter().enumerate() {
        let Some(key) = item.key() else { continue };
        let Some(claimants) = by_key.get(glyphs::normalize(key)) else {
            continue;
        };
        if claimants.len() > 1 {
            errors.push(ValidationError::new(
                ValidationErrorType::DuplicateKey,
                child_path(path, idx),
                format!(
                    "Key \"{}\" is used by {} items in this group",
                    key,
                    claimants.len()
                ),
            ));
        }
    }

    for (idx, item) in group.actions.iter().enumerate() {
        if let KeyItem::Group(child) = item {
            path.push(idx);
            validate_group(child, path, errors);
            path.pop();
        }
    }
}

fn child_path(path: &[usize], idx: usize) -> Path {
    let mut child = path.to_vec();
    child.push(idx);
    child
}

/// A borrowed node of the tree; the root is a group without a `KeyItem`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef<'a> {
    Group(&'a Group),
    Action(&'a Action),
}

impl<'a> ItemRef<'a> {
    pub fn key(&self) -> Option<&'a str> {
        match self {
            ItemRef::Group(group) => group.key.as_deref(),
            ItemRef::Action(action) => action.key.as_deref(),
        }
    }

    pub fn as_group(&self) -> Option<&'a Group> {
        match self {
            ItemRef::Group(group) => Some(group),
            ItemRef::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&'a Action> {
        match self {
            ItemRef::Action(action) => Some(action),
            ItemRef::Group(_) => None,
        }
    }
}

impl<'a> From<&'a KeyItem> for ItemRef<'a> {
    fn from(item: &'a KeyItem) -> Self {
        match item {
            KeyItem::Group(group) => ItemRef::Group(group),
            KeyItem::Action(action) => ItemRef::Action(action),
        }
    }
}

/// Resolve a path to the node it addresses
///
/// The empty path is the root. Out-of-range indices and paths that continue
/// beneath an action resolve to `None`.
pub fn find_item<'a>(root: &'a Group, path: &[usize]) -> Option<ItemRef<'a>> {
    let mut current = ItemRef::Group(root);
    for &idx in path {
        let group = current.as_group()?;
        current = group.actions.get(idx)?.into();
    }
    Some(current)
}

/// All errors reported for exactly this path
pub fn errors_at<'a>(
    errors: &'a [ValidationError],
    path: &'a [usize],
) -> impl Iterator<Item = &'a ValidationError> + 'a {
    errors.iter().filter(move |error| error.path == path)
}

/// First error for a path, for inline display next to the item
pub fn error_for<'a>(errors: &'a [ValidationError], path: &[usize]) -> Option<&'a ValidationError> {
    errors.iter().find(|error| error.path == path)
}
