use crate::error::Result;
use crate::process::{CommandRunner, Invocation};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted outcome of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub code: i32,
    pub output: String,
}

/// Mock runner for testing without spawning processes
///
/// Responses are keyed by [Invocation::command]. Commands without a scripted
/// response succeed with empty output.
pub struct MockRunner {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a new mock runner with no scripted responses
    pub fn new() -> Self {
        MockRunner {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the exit code and output for a command line such as `"git remote"`
    pub fn respond(
        mut self,
        command: impl Into<String>,
        code: i32,
        output: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            command.into(),
            MockResponse {
                code,
                output: output.into(),
            },
        );
        self
    }

    /// Script a failing command with no output
    pub fn fail(self, command: impl Into<String>, code: i32) -> Self {
        self.respond(command, code, "")
    }

    /// Every invocation seen so far, in order
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Commands (without environment prefix) seen so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.calls().iter().map(Invocation::command).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn record(&self, invocation: &Invocation) -> MockResponse {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(invocation.clone());
        }
        self.responses
            .get(&invocation.command())
            .cloned()
            .unwrap_or(MockResponse {
                code: 0,
                output: String::new(),
            })
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn call(&self, invocation: &Invocation) -> Result<i32> {
        let response = self.record(invocation);
        invocation.finish_call(response.code)
    }

    fn check_output(&self, invocation: &Invocation) -> Result<String> {
        let response = self.record(invocation);
        invocation.finish_output(response.code, &response.output)
    }
}
