use boilerplate_setup::{
    command::RecordingRunner,
    finisher::Finisher,
    prompt::ScriptedGateway,
    setup::{Outcome, SetupSequence},
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<html><head><title>%project_title%</title></head></html>";
pub const PACKAGE_JSON: &str = r#"{"name": "project_title", "private": true}"#;

/// Creates a throwaway project tree holding both substitution targets.
pub fn scaffold_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("public")).unwrap();
    fs::write(dir.path().join("public/index-full.html"), INDEX_HTML).unwrap();
    fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();
    dir
}

/// Everything a scripted run left behind.
pub struct RunResult {
    pub outcome: Outcome,
    pub commands: Vec<String>,
    pub output: String,
    pub asked: Vec<String>,
}

impl RunResult {
    pub fn count_output(&self, needle: &str) -> usize {
        self.output.matches(needle).count()
    }

    pub fn count_asked(&self, schema: &str) -> usize {
        self.asked.iter().filter(|name| *name == schema).count()
    }
}

/// Runs the whole setup sequence against `project_dir`, answering from `answers`.
pub fn run_script(project_dir: &Path, answers: &[&str]) -> RunResult {
    let mut gateway = ScriptedGateway::new(answers.iter().copied());
    let mut runner = RecordingRunner::new();
    let mut output = Vec::new();

    let outcome = SetupSequence::with_output(
        &mut gateway,
        &mut runner,
        Finisher::new(project_dir),
        &mut output,
    )
    .run()
    .unwrap();

    RunResult {
        outcome,
        commands: runner.commands,
        output: String::from_utf8(output).unwrap(),
        asked: gateway.asked().to_vec(),
    }
}
