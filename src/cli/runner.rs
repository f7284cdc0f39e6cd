use console::style;
use serde_json::Map;

use crate::{
    answers::{current_library_name, AnswerCollector, AnswerSet},
    cleanup::{remove_paths, reinit_vcs},
    cli::Args,
    config::BootstrapConfig,
    constants::STDIN_INDICATOR,
    error::Result,
    exec::{CommandExecutor, ShellExecutor},
    install::install_dependencies,
    ioutils::{parse_string_to_json, read_from},
    manifest::trim_manifest,
    prompt::{DialoguerPrompter, PromptProvider},
    replacer::{build_placeholder_map, substitute_all, FailurePolicy},
};

/// Main CLI runner that orchestrates the whole bootstrap pipeline.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the pipeline against the real terminal and shell.
    pub fn run(self) -> Result<()> {
        let config = BootstrapConfig::standard(&self.args.project_root);
        let provider = DialoguerPrompter::new();
        let executor = ShellExecutor;
        self.run_with(&config, &provider, &executor)
    }

    /// Executes the pipeline with explicit collaborators. Tests inject scripted
    /// prompt providers and fake executors here.
    pub fn run_with(
        &self,
        config: &BootstrapConfig,
        provider: &dyn PromptProvider,
        executor: &dyn CommandExecutor,
    ) -> Result<()> {
        let answers = self.collect_answers(config, provider)?;
        println!(
            "{}",
            style(format!(
                "Hi {}. I'll run my magic now, hang tight!",
                answers.full_name
            ))
            .magenta()
        );

        self.substitute_placeholders(config, &answers, executor)?;
        self.trim_manifest(config)?;
        self.clean_up(config)?;
        self.reinitialize_vcs(config, executor)?;
        self.install(config, executor)?;

        println!("{}", style("You are good to go!").green().bold());
        Ok(())
    }

    /// Stage 1: collect the answer set from predefined values and prompts.
    fn collect_answers(
        &self,
        config: &BootstrapConfig,
        provider: &dyn PromptProvider,
    ) -> Result<AnswerSet> {
        let candidate = current_library_name(&config.root);
        let predefined = self.parse_predefined_answers()?;

        let collector = AnswerCollector::new(provider, self.args.non_interactive);
        collector.collect(&candidate, predefined)
    }

    /// Stage 2: rewrite the target files in place.
    fn substitute_placeholders(
        &self,
        config: &BootstrapConfig,
        answers: &AnswerSet,
        executor: &dyn CommandExecutor,
    ) -> Result<()> {
        stage("[replace] Rewriting scaffold files");
        let placeholders = build_placeholder_map(answers, &config.root, executor);
        let policy =
            if self.args.strict { FailurePolicy::Abort } else { FailurePolicy::BestEffort };

        substitute_all(&config.root, &config.target_files, &placeholders, policy)?;
        for file in &config.target_files {
            println!("{}", style(config.root.join(file).display()).white());
        }
        stage("[replace] Rewriting scaffold files complete");
        Ok(())
    }

    /// Stage 3: trim scaffold-only entries from the manifest. Must run before
    /// cleanup, which may delete paths the manifest read depends on.
    fn trim_manifest(&self, config: &BootstrapConfig) -> Result<()> {
        stage("[package] Writing package.json");
        trim_manifest(
            &config.manifest_path(),
            &config.dev_dependency_denylist,
            &config.script_denylist,
        )?;
        stage("[package] Writing package.json complete");
        Ok(())
    }

    /// Stage 4a: delete the scaffold-only paths.
    fn clean_up(&self, config: &BootstrapConfig) -> Result<()> {
        stage("[remove] Removing scaffold files");
        remove_paths(&config.root, &config.removal_paths)?;
        for path in &config.removal_paths {
            println!("{}", style(config.root.join(path).display()).red());
        }
        stage("[remove] Removing scaffold files complete");
        Ok(())
    }

    /// Stage 4b: reinitialize version control from a clean state.
    fn reinitialize_vcs(
        &self,
        config: &BootstrapConfig,
        executor: &dyn CommandExecutor,
    ) -> Result<()> {
        stage("[git] Init");
        let output = reinit_vcs(&config.root, executor)?;
        if !output.is_empty() {
            println!("{}", style(output).white());
        }
        stage("[git] Init complete");
        Ok(())
    }

    /// Stage 5: install the trimmed dependency set.
    fn install(&self, config: &BootstrapConfig, executor: &dyn CommandExecutor) -> Result<()> {
        if self.args.skip_install {
            log::info!("Skipping dependency installation (--skip-install)");
            return Ok(());
        }
        stage("[install] Installing dependencies");
        install_dependencies(&config.root, executor)?;
        stage("[install] Installing dependencies complete");
        Ok(())
    }

    /// Parses `--answers`, reading from stdin when `-` is given.
    fn parse_predefined_answers(&self) -> Result<Map<String, serde_json::Value>> {
        match &self.args.answers {
            None => Ok(Map::new()),
            Some(arg) if arg == STDIN_INDICATOR => {
                let buf = read_from(std::io::stdin())?;
                parse_string_to_json(&buf)
            }
            Some(arg) => parse_string_to_json(arg),
        }
    }
}

fn stage(message: &str) {
    println!("{}", style(message).cyan());
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
