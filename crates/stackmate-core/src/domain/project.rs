//! Project naming and on-disk layout.
//!
//! [`ProjectLayout`] is the explicit context value threaded through every
//! wizard operation: the project root, the backend directory name, and the
//! ordered candidate filenames the generator's output is probed for. Holding
//! these in one value (instead of ambient constants at call-sites) lets tests
//! point the wizard at an injected temporary root and rename any piece of the
//! layout.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Name substituted when the user submits an empty or whitespace-only name.
pub const DEFAULT_PROJECT_NAME: &str = "myapp";

/// Fixed name of the backend subdirectory inside the project root.
pub const BACKEND_DIR_NAME: &str = "backend";

/// A validated project name.
///
/// Separators and dot-prefixed names are rejected here, before any directory
/// is created; the name must be usable as a single path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse user input into a project name.
    ///
    /// Input is trimmed; an empty result yields [`DEFAULT_PROJECT_NAME`].
    /// Any other value must be usable as a single directory name.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Ok(Self(DEFAULT_PROJECT_NAME.to_string()));
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(DomainError::InvalidProjectName {
                name: trimmed.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        if trimmed.starts_with('.') {
            return Err(DomainError::InvalidProjectName {
                name: trimmed.into(),
                reason: "name cannot start with '.'".into(),
            });
        }
        if trimmed.contains('\0') {
            return Err(DomainError::InvalidProjectName {
                name: trimmed.into(),
                reason: "name cannot contain NUL bytes".into(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The built-in default name.
    pub fn default_name() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where everything the wizard touches lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    name: ProjectName,
    root: PathBuf,
    backend_dir_name: String,
    app_entry_candidates: Vec<PathBuf>,
    dev_config_candidates: Vec<PathBuf>,
}

impl ProjectLayout {
    /// Build the standard layout: root is `<parent>/<name>`, backend is
    /// `backend/`, and the frontend probe lists match what Vite's React
    /// templates emit (`App.jsx` before `App.tsx`, `vite.config.ts` before
    /// `vite.config.js`).
    pub fn new(name: ProjectName, parent: impl Into<PathBuf>) -> Self {
        let root = parent.into().join(name.as_str());
        Self {
            name,
            root,
            backend_dir_name: BACKEND_DIR_NAME.to_string(),
            app_entry_candidates: vec![
                PathBuf::from("src").join("App.jsx"),
                PathBuf::from("src").join("App.tsx"),
            ],
            dev_config_candidates: vec![
                PathBuf::from("vite.config.ts"),
                PathBuf::from("vite.config.js"),
            ],
        }
    }

    /// Override the backend directory name (test injection).
    pub fn with_backend_dir(mut self, name: impl Into<String>) -> Self {
        self.backend_dir_name = name.into();
        self
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.name
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn backend_dir_name(&self) -> &str {
        &self.backend_dir_name
    }

    /// `<root>/backend`
    pub fn backend_dir(&self) -> PathBuf {
        self.root.join(&self.backend_dir_name)
    }

    /// `<root>/backend/main.py`
    pub fn backend_main(&self) -> PathBuf {
        self.backend_dir().join("main.py")
    }

    /// `<root>/backend/requirements.txt`
    pub fn backend_requirements(&self) -> PathBuf {
        self.backend_dir().join("requirements.txt")
    }

    /// Ordered application-entry candidates inside a detected frontend dir.
    pub fn app_entry_candidates(&self, frontend_dir: &Path) -> Vec<PathBuf> {
        self.app_entry_candidates
            .iter()
            .map(|rel| frontend_dir.join(rel))
            .collect()
    }

    /// Ordered dev-server config candidates inside a detected frontend dir.
    pub fn dev_config_candidates(&self, frontend_dir: &Path) -> Vec<PathBuf> {
        self.dev_config_candidates
            .iter()
            .map(|rel| frontend_dir.join(rel))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── ProjectName::parse ────────────────────────────────────────────────────

    #[test]
    fn empty_input_yields_default() {
        assert_eq!(ProjectName::parse("").unwrap().as_str(), "myapp");
    }

    #[test]
    fn whitespace_only_input_yields_default() {
        assert_eq!(ProjectName::parse("   \t ").unwrap().as_str(), "myapp");
        assert_eq!(ProjectName::parse("\n").unwrap().as_str(), "myapp");
    }

    #[test]
    fn non_empty_input_is_trimmed_exactly() {
        assert_eq!(ProjectName::parse("  demo  ").unwrap().as_str(), "demo");
        assert_eq!(ProjectName::parse("My-Shop").unwrap().as_str(), "My-Shop");
    }

    #[test]
    fn path_separators_are_rejected() {
        assert!(ProjectName::parse("a/b").is_err());
        assert!(ProjectName::parse("a\\b").is_err());
        assert!(ProjectName::parse("../escape").is_err());
    }

    #[test]
    fn dot_prefixed_names_are_rejected() {
        assert!(matches!(
            ProjectName::parse(".hidden"),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(ProjectName::parse("..").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["myapp", "my-shop", "demo123", "MyApp", "a_b"] {
            assert!(ProjectName::parse(name).is_ok(), "failed for: {name}");
        }
    }

    // ── ProjectLayout ─────────────────────────────────────────────────────────

    #[test]
    fn root_is_parent_joined_with_name() {
        let layout = ProjectLayout::new(ProjectName::parse("demo").unwrap(), "/tmp/work");
        assert_eq!(layout.root(), Path::new("/tmp/work/demo"));
    }

    #[test]
    fn backend_paths_are_fixed() {
        let layout = ProjectLayout::new(ProjectName::default_name(), ".");
        assert_eq!(layout.backend_dir(), PathBuf::from("./myapp/backend"));
        assert_eq!(
            layout.backend_main(),
            PathBuf::from("./myapp/backend/main.py")
        );
        assert_eq!(
            layout.backend_requirements(),
            PathBuf::from("./myapp/backend/requirements.txt")
        );
    }

    #[test]
    fn app_entry_probes_jsx_before_tsx() {
        let layout = ProjectLayout::new(ProjectName::default_name(), ".");
        let candidates = layout.app_entry_candidates(Path::new("./myapp/frontend"));
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].ends_with("src/App.jsx"));
        assert!(candidates[1].ends_with("src/App.tsx"));
    }

    #[test]
    fn dev_config_probes_ts_before_js() {
        let layout = ProjectLayout::new(ProjectName::default_name(), ".");
        let candidates = layout.dev_config_candidates(Path::new("./myapp/frontend"));
        assert!(candidates[0].ends_with("vite.config.ts"));
        assert!(candidates[1].ends_with("vite.config.js"));
    }

    #[test]
    fn backend_dir_override_is_honoured() {
        let layout =
            ProjectLayout::new(ProjectName::default_name(), ".").with_backend_dir("server");
        assert_eq!(layout.backend_dir_name(), "server");
        assert!(layout.backend_main().ends_with("server/main.py"));
    }
}
