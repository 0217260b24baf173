//! Path-to-view resolution.
//!
//! The core only needs to know which screen a path selects and, for the
//! edit screen, the raw record id segment; everything else about navigation
//! belongs to the shell.

/// Screen selected by a navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: the employee list.
    List,
    /// `/new`: the create form.
    New,
    /// `/edit/<id>`: the edit form with an opaque id segment.
    Edit(String),
    /// Anything else.
    NotFound,
}

impl Route {
    /// Parses a navigation path. Tolerates a trailing slash.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let mut segments = trimmed.split('/').filter(|segment| !segment.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, ..) => Route::List,
            (Some("new"), None, _) => Route::New,
            (Some("edit"), Some(id), None) => Route::Edit(id.to_string()),
            _ => Route::NotFound,
        }
    }
}
