//! Scripted process runner for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use stackmate_core::{
    application::ports::{CommandSpec, ProcessRunner, RunStatus},
    error::StackmateResult,
};

type Effect = Box<dyn Fn(&CommandSpec) + Send + Sync>;

/// Test double that replays a fixed script of run results.
///
/// Each call pops the next scripted result; calls beyond the script succeed.
/// Every invocation is recorded for later assertion, and an optional effect
/// hook fires on each successful run so tests can simulate the generator's
/// side effects (e.g. creating a frontend directory in a
/// [`MemoryFilesystem`](crate::MemoryFilesystem)).
pub struct ScriptedRunner {
    script: Mutex<VecDeque<StackmateResult<RunStatus>>>,
    calls: Mutex<Vec<CommandSpec>>,
    on_success: Option<Effect>,
}

impl ScriptedRunner {
    /// Create a runner that replays `results` in order.
    pub fn new(results: impl IntoIterator<Item = StackmateResult<RunStatus>>) -> Self {
        Self {
            script: Mutex::new(results.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            on_success: None,
        }
    }

    /// A runner whose every invocation succeeds.
    pub fn always_succeeding() -> Self {
        Self::new([])
    }

    /// Attach a hook invoked on each successful (scripted) run.
    pub fn with_success_effect(
        mut self,
        effect: impl Fn(&CommandSpec) + Send + Sync + 'static,
    ) -> Self {
        self.on_success = Some(Box::new(effect));
        self
    }

    /// Every command this runner has been asked to execute, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec) -> StackmateResult<RunStatus> {
        self.calls.lock().unwrap().push(command.clone());

        let result = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(RunStatus::Success));

        if let (Ok(RunStatus::Success), Some(effect)) = (&result, &self.on_success) {
            effect(command);
        }

        result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn replays_scripted_results_in_order() {
        let runner = ScriptedRunner::new([
            Ok(RunStatus::Failed { code: Some(1) }),
            Ok(RunStatus::Success),
        ]);
        let spec = CommandSpec::primary_generator(Path::new("."));

        assert_eq!(
            runner.run(&spec).unwrap(),
            RunStatus::Failed { code: Some(1) }
        );
        assert_eq!(runner.run(&spec).unwrap(), RunStatus::Success);
        // Beyond the script: success.
        assert_eq!(runner.run(&spec).unwrap(), RunStatus::Success);
    }

    #[test]
    fn records_every_invocation() {
        let runner = ScriptedRunner::always_succeeding();
        let primary = CommandSpec::primary_generator(Path::new("/p"));
        let fallback = CommandSpec::fallback_generator(Path::new("/p"));

        runner.run(&primary).unwrap();
        runner.run(&fallback).unwrap();
        assert_eq!(runner.calls(), vec![primary, fallback]);
    }

    #[test]
    fn effect_fires_only_on_success() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let runner = ScriptedRunner::new([
            Ok(RunStatus::Failed { code: Some(2) }),
            Ok(RunStatus::Success),
        ])
        .with_success_effect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let spec = CommandSpec::primary_generator(Path::new("."));
        runner.run(&spec).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        runner.run(&spec).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
