use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::domain::CommandOutcome;
use crate::ports::GitPort;

/// Scripted git runner.
///
/// Responses are queued per exact argument line (`"branch -a"`). The last queued
/// response for a line repeats; unscripted lines succeed with empty output.
#[derive(Default)]
pub struct FakeGit {
    responses: Mutex<HashMap<String, VecDeque<CommandOutcome>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, args: &str, outcome: CommandOutcome) -> Self {
        self.responses.lock().unwrap().entry(args.to_string()).or_default().push_back(outcome);
        self
    }

    pub fn on_success(self, args: &str, output: &str) -> Self {
        self.on(args, CommandOutcome::success(output))
    }

    pub fn on_failure(self, args: &str, output: &str) -> Self {
        self.on(args, CommandOutcome::failure(output))
    }

    /// Every argument line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, args: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == args)
    }
}

impl GitPort for FakeGit {
    async fn run(&self, args: &[&str]) -> CommandOutcome {
        let line = args.join(" ");
        self.calls.lock().unwrap().push(line.clone());

        let mut responses = self.responses.lock().unwrap();
        match responses.get_mut(&line) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| CommandOutcome::success("")),
            None => CommandOutcome::success(""),
        }
    }
}
