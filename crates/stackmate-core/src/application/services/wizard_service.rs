//! Wizard service - main application orchestrator.
//!
//! This service runs the whole setup sequence:
//! 1. Create the project root and backend directory
//! 2. Write the backend entry point and dependency manifest
//! 3. Run the frontend generator (with one fallback attempt)
//! 4. Detect the generated frontend directory
//! 5. Rewrite the app entry file and the dev-server config
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandSpec, Filesystem, ProcessRunner, RunStatus},
    domain::{ProjectLayout, templates},
    error::StackmateResult,
};

/// What one wizard run produced.
///
/// Serializable so the CLI can emit it as JSON when asked for machine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardReport {
    pub project_name: String,
    pub backend_dir: PathBuf,
    pub frontend: FrontendStatus,
}

/// Outcome of the frontend half of the run.
///
/// Detection misses and rewrite misses are states, not errors: the backend
/// files are already on disk and the user gets told exactly what was and
/// wasn't wired up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FrontendStatus {
    /// A frontend directory was found; the two rewrites were attempted
    /// independently and each records whether a recognized file existed.
    Detected {
        dir_name: String,
        app_entry: Option<PathBuf>,
        dev_config: Option<PathBuf>,
        used_fallback: bool,
    },
    /// The generator ran but no non-backend subdirectory appeared.
    NotDetected { used_fallback: bool },
}

impl WizardReport {
    /// The detected frontend directory name, if any.
    pub fn frontend_dir_name(&self) -> Option<&str> {
        match &self.frontend {
            FrontendStatus::Detected { dir_name, .. } => Some(dir_name),
            FrontendStatus::NotDetected { .. } => None,
        }
    }
}

/// Main wizard service.
///
/// Orchestrates directory creation, template writes, and the generator
/// invocation through the injected ports.
pub struct WizardService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
}

impl WizardService {
    /// Create a new wizard service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn ProcessRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Run the full setup sequence for `layout`.
    ///
    /// Fatal errors (filesystem failures, both generator attempts failing)
    /// abort the run; files written before the failure stay on disk. A
    /// missing frontend directory or unrecognized frontend files are soft
    /// outcomes carried in the returned [`WizardReport`].
    #[instrument(skip_all, fields(project = %layout.project_name(), root = %layout.root().display()))]
    pub fn run(&self, layout: &ProjectLayout) -> StackmateResult<WizardReport> {
        info!("Setting up FastAPI + React project");

        // 1. Project root + backend files. Creation is idempotent; re-running
        //    over an existing root only overwrites the generated files.
        self.filesystem.create_dir_all(layout.root())?;
        self.write_backend(layout)?;

        // 2. Frontend generator, with one fallback attempt.
        let used_fallback = self.run_generator(layout.root())?;

        // 3. Detect whatever directory the generator created.
        let Some(frontend_dir) = self.detect_frontend_dir(layout)? else {
            warn!("no frontend directory detected after generator run");
            return Ok(WizardReport {
                project_name: layout.project_name().to_string(),
                backend_dir: layout.backend_dir(),
                frontend: FrontendStatus::NotDetected { used_fallback },
            });
        };

        let dir_name = frontend_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(frontend = %dir_name, "frontend directory detected");

        // 4. The two rewrites are independent; a miss on one does not skip
        //    the other.
        let app_entry =
            self.rewrite_first_existing(&layout.app_entry_candidates(&frontend_dir), templates::APP_ENTRY)?;
        match &app_entry {
            Some(path) => info!(path = %path.display(), "app entry rewritten to call the backend"),
            None => warn!("no App.jsx or App.tsx found in the frontend directory"),
        }

        let dev_config = self
            .rewrite_first_existing(&layout.dev_config_candidates(&frontend_dir), templates::VITE_CONFIG)?;
        match &dev_config {
            Some(path) => info!(path = %path.display(), "dev-server proxy config written"),
            None => warn!("no vite.config.ts or vite.config.js found in the frontend directory"),
        }

        info!("Setup completed");
        Ok(WizardReport {
            project_name: layout.project_name().to_string(),
            backend_dir: layout.backend_dir(),
            frontend: FrontendStatus::Detected {
                dir_name,
                app_entry,
                dev_config,
                used_fallback,
            },
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the fixed backend stub: `main.py` and `requirements.txt`.
    fn write_backend(&self, layout: &ProjectLayout) -> StackmateResult<()> {
        self.filesystem.create_dir_all(&layout.backend_dir())?;
        self.filesystem
            .write_file(&layout.backend_main(), templates::BACKEND_MAIN)?;
        self.filesystem
            .write_file(&layout.backend_requirements(), templates::BACKEND_REQUIREMENTS)?;
        info!(dir = %layout.backend_dir().display(), "backend stub written");
        Ok(())
    }

    /// Run the primary generator; on any failure, run the fallback once.
    ///
    /// Returns whether the fallback was the command that succeeded. A spawn
    /// failure of the primary (e.g. `npx` not installed) also triggers the
    /// fallback; only the fallback's failure is fatal.
    fn run_generator(&self, root: &Path) -> StackmateResult<bool> {
        let primary = CommandSpec::primary_generator(root);
        info!(command = %primary.display_line(), "launching frontend generator");

        match self.runner.run(&primary) {
            Ok(RunStatus::Success) => return Ok(false),
            Ok(RunStatus::Failed { code }) => {
                warn!(command = %primary.display_line(), ?code, "primary generator failed, falling back to Vite");
            }
            Err(e) => {
                warn!(command = %primary.display_line(), error = %e, "primary generator unavailable, falling back to Vite");
            }
        }

        let fallback = CommandSpec::fallback_generator(root);
        info!(command = %fallback.display_line(), "launching fallback generator");

        match self.runner.run(&fallback)? {
            RunStatus::Success => Ok(true),
            RunStatus::Failed { code } => Err(crate::application::ApplicationError::GeneratorFailed {
                command: fallback.display_line(),
                code,
            }
            .into()),
        }
    }

    /// First immediate subdirectory of the root that is not the backend dir.
    fn detect_frontend_dir(&self, layout: &ProjectLayout) -> StackmateResult<Option<PathBuf>> {
        let dirs = self.filesystem.list_dirs(layout.root())?;
        Ok(dirs.into_iter().find(|dir| {
            dir.file_name()
                .map(|name| name != layout.backend_dir_name())
                .unwrap_or(false)
        }))
    }

    /// Overwrite the first candidate that exists with `content`.
    ///
    /// Returns the path that was rewritten, or `None` if no candidate exists.
    fn rewrite_first_existing(
        &self,
        candidates: &[PathBuf],
        content: &str,
    ) -> StackmateResult<Option<PathBuf>> {
        for candidate in candidates {
            if self.filesystem.exists(candidate) {
                self.filesystem.write_file(candidate, content)?;
                return Ok(Some(candidate.clone()));
            }
        }
        Ok(None)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockProcessRunner};
    use crate::domain::ProjectName;
    use crate::error::StackmateError;

    fn layout() -> ProjectLayout {
        ProjectLayout::new(ProjectName::parse("demo").unwrap(), "/tmp/work")
    }

    /// A filesystem mock that accepts every directory/file operation.
    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn fallback_runs_exactly_once_when_primary_fails() {
        let mut fs = permissive_fs();
        fs.expect_list_dirs().returning(|_| Ok(vec![]));

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| *cmd == CommandSpec::primary_generator(Path::new("/tmp/work/demo")))
            .times(1)
            .returning(|_| Ok(RunStatus::Failed { code: Some(1) }));
        runner
            .expect_run()
            .withf(|cmd| *cmd == CommandSpec::fallback_generator(Path::new("/tmp/work/demo")))
            .times(1)
            .returning(|_| Ok(RunStatus::Success));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        let report = service.run(&layout()).unwrap();
        assert_eq!(
            report.frontend,
            FrontendStatus::NotDetected { used_fallback: true }
        );
    }

    #[test]
    fn fallback_is_not_invoked_when_primary_succeeds() {
        let mut fs = permissive_fs();
        fs.expect_list_dirs().returning(|_| Ok(vec![]));

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(RunStatus::Success));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        let report = service.run(&layout()).unwrap();
        assert_eq!(
            report.frontend,
            FrontendStatus::NotDetected {
                used_fallback: false
            }
        );
    }

    #[test]
    fn both_generators_failing_aborts_before_any_frontend_probe() {
        let fs = permissive_fs();
        // No list_dirs expectation: detection must never be reached.

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .times(2)
            .returning(|_| Ok(RunStatus::Failed { code: Some(127) }));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        let err = service.run(&layout()).unwrap_err();
        assert!(matches!(
            err,
            StackmateError::Application(
                crate::application::ApplicationError::GeneratorFailed { code: Some(127), .. }
            )
        ));
    }

    #[test]
    fn primary_spawn_failure_still_triggers_fallback() {
        let mut fs = permissive_fs();
        fs.expect_list_dirs().returning(|_| Ok(vec![]));

        let mut runner = MockProcessRunner::new();
        let mut seq = mockall::Sequence::new();
        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(crate::application::ApplicationError::GeneratorUnavailable {
                    command: "npx create-launcher".into(),
                    reason: "No such file or directory".into(),
                }
                .into())
            });
        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(RunStatus::Success));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        let report = service.run(&layout()).unwrap();
        assert!(matches!(
            report.frontend,
            FrontendStatus::NotDetected { used_fallback: true }
        ));
    }

    #[test]
    fn backend_files_are_written_with_fixed_templates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/tmp/work/demo"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/tmp/work/demo/backend"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| {
                p == Path::new("/tmp/work/demo/backend/main.py")
                    && content == templates::BACKEND_MAIN
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| {
                p == Path::new("/tmp/work/demo/backend/requirements.txt")
                    && content == templates::BACKEND_REQUIREMENTS
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_list_dirs().returning(|_| Ok(vec![]));

        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|_| Ok(RunStatus::Success));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        service.run(&layout()).unwrap();
    }

    #[test]
    fn detection_skips_the_backend_directory() {
        let mut fs = permissive_fs();
        fs.expect_list_dirs().returning(|_| {
            Ok(vec![
                PathBuf::from("/tmp/work/demo/backend"),
                PathBuf::from("/tmp/work/demo/frontend-app"),
            ])
        });
        fs.expect_exists().returning(|_| false);

        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|_| Ok(RunStatus::Success));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        let report = service.run(&layout()).unwrap();
        assert_eq!(report.frontend_dir_name(), Some("frontend-app"));
    }

    #[test]
    fn missing_app_entry_does_not_skip_the_dev_config_rewrite() {
        let mut fs = permissive_fs();
        fs.expect_list_dirs()
            .returning(|_| Ok(vec![PathBuf::from("/tmp/work/demo/frontend")]));
        // Only vite.config.js exists; App.jsx/App.tsx and vite.config.ts do not.
        fs.expect_exists()
            .returning(|path| path.ends_with("vite.config.js"));

        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|_| Ok(RunStatus::Success));

        let service = WizardService::new(Box::new(fs), Box::new(runner));
        let report = service.run(&layout()).unwrap();
        match report.frontend {
            FrontendStatus::Detected {
                app_entry,
                dev_config,
                ..
            } => {
                assert_eq!(app_entry, None);
                assert_eq!(
                    dev_config,
                    Some(PathBuf::from("/tmp/work/demo/frontend/vite.config.js"))
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
