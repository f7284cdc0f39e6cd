//! Shared fixtures for the bootstrap integration tests.

use liftoff::error::Result;
use liftoff::exec::{CommandExecutor, CommandOutput};
use liftoff::prompt::{
    ConfirmationConfig, ConfirmationPrompter, TextPromptConfig, TextPrompter,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

pub const GIT_USER_NAME: &str = "Ada Lovelace";
pub const GIT_USER_EMAIL: &str = "ada@lovelace.dev";

/// Lays out a minimal copy of the library scaffold inside `dir`: the target
/// files carrying placeholder tokens, the manifest, and the scaffold-only
/// paths slated for removal.
pub fn build_scaffold(dir: &Path) {
    fs::create_dir_all(dir.join("scripts")).unwrap();
    fs::create_dir_all(dir.join(".git/objects")).unwrap();

    fs::write(
        dir.join("LICENSE"),
        "MIT License\n\nCopyright (c) --year-- --fullname-- <--useremail-->\n",
    )
    .unwrap();
    fs::write(
        dir.join("CONTRIBUTING.md"),
        "# Contributing to --libraryname--\n\nPing --username-- for reviews.\n",
    )
    .unwrap();
    fs::write(
        dir.join("CODE-OF-CONDUCT.md"),
        "Contact --useremail-- to report issues.\n",
    )
    .unwrap();
    fs::write(
        dir.join("README.md"),
        "# --libraryname--\n\nBy --fullname--.\n\nInstall with `npm i --libraryname--`.\n",
    )
    .unwrap();
    fs::write(
        dir.join("package.json"),
        r#"{
  "name": "--libraryname--",
  "version": "0.0.1",
  "author": "--fullname-- <--useremail-->",
  "devDependencies": {
    "enquirer": "^2.3.0",
    "chalk": "^4.0.0",
    "replace-in-file": "^6.0.0",
    "typescript": "^4.0.0"
  },
  "scripts": {
    "bootstrap": "node scripts/bootstrap.js",
    "build": "tsc",
    "test": "jest"
  }
}
"#,
    )
    .unwrap();
    fs::write(
        dir.join("scripts/gh-pages-publish.js"),
        "// publish docs for --libraryname--\n",
    )
    .unwrap();
    fs::write(dir.join("doczrc.js"), "export default { title: '--libraryname--' };\n")
        .unwrap();

    fs::write(dir.join(".gitattributes"), "* text=auto\n").unwrap();
    fs::write(dir.join("scripts/bootstrap.js"), "// scaffold bootstrap stub\n").unwrap();
    fs::write(dir.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(dir.join("yarn.lock"), "# yarn lockfile v1\n").unwrap();
}

/// Prompt provider replaying scripted responses in order. Panics when a prompt
/// fires that the script did not anticipate.
pub struct ScriptedPrompter {
    texts: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
}

impl ScriptedPrompter {
    pub fn new(texts: &[&str], confirms: &[bool]) -> Self {
        Self {
            texts: RefCell::new(texts.iter().map(|s| s.to_string()).collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
        }
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        match self.texts.borrow_mut().pop_front() {
            Some(text) => Ok(text),
            None => panic!("unexpected text prompt: {}", config.prompt),
        }
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        match self.confirms.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("unexpected confirm prompt: {}", config.prompt),
        }
    }
}

/// Executor that records every invocation and answers git queries with canned
/// values instead of touching the real shell.
pub struct RecordingExecutor {
    pub calls: RefCell<Vec<String>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self { calls: RefCell::new(vec![]) }
    }

    pub fn saw(&self, call: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == call)
    }

    fn ok(stdout: &str) -> Result<CommandOutput> {
        Ok(CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn capture(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<CommandOutput> {
        let call = format!("{program} {}", args.join(" "));
        self.calls.borrow_mut().push(call.clone());

        match call.as_str() {
            "git config user.name" => Self::ok(&format!("{GIT_USER_NAME}\n")),
            "git config user.email" => Self::ok(&format!("{GIT_USER_EMAIL}\n")),
            "git init" => Self::ok("Initialized empty Git repository\n"),
            _ => Self::ok(""),
        }
    }

    fn stream(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<CommandOutput> {
        let call = format!("{program} {}", args.join(" ")).trim().to_string();
        self.calls.borrow_mut().push(call);
        Self::ok("")
    }
}
