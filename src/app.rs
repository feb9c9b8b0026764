use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::core::{
    EntryReport, GitHistory, HistorySource, NoHistory, RenameContext, RunOptions, Summary,
    remap_files, rename_files,
};
use crate::error::AppError;
use crate::output::{ProgressOptions, output_report_json, print_entry, print_summary};
use crate::plan::Plan;
use crate::utils::{Timezone, debug_log};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) plan: &'a Plan,
    pub(crate) timezone: Timezone,
}

impl CommandContext<'_> {
    fn options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.cli.dry_run,
        }
    }

    fn progress(&self) -> ProgressOptions {
        ProgressOptions {
            command: self.cli.command,
            dry_run: self.cli.dry_run,
            use_color: self.cli.use_color(),
            timezone: self.timezone,
        }
    }

    /// Status lines go to stderr and disappear in JSON mode
    fn status(&self, message: &str) {
        if !self.cli.json {
            eprintln!("{message}");
        }
    }

    fn observe(&self) -> impl FnMut(&EntryReport) + '_ {
        let progress = self.progress();
        move |report: &EntryReport| {
            if !self.cli.json {
                print_entry(report, &progress);
            }
        }
    }

    fn finish(&self, reports: &[EntryReport]) {
        let summary = Summary::from_reports(reports);
        if self.cli.json {
            println!(
                "{}",
                output_report_json(self.cli.command, self.cli.dry_run, reports, &summary)
            );
        } else {
            print_summary(
                &summary,
                self.cli.command,
                self.cli.dry_run,
                self.cli.use_color(),
            );
        }
    }
}

/// The working root must be the top of a git checkout
pub(crate) fn check_repository(root: &Path) -> Result<(), AppError> {
    if root.join(".git").exists() {
        Ok(())
    } else {
        Err(AppError::NotARepository {
            root: root.to_path_buf(),
        })
    }
}

fn check_docs_dir(docs_dir: &Path) -> Result<(), AppError> {
    if docs_dir.is_dir() {
        Ok(())
    } else {
        Err(AppError::MissingDocsDir {
            path: docs_dir.to_path_buf(),
        })
    }
}

fn handle_reorganize(ctx: &CommandContext<'_>) {
    let entries = &ctx.plan.moves;
    if entries.is_empty() {
        ctx.status("Plan has no [[move]] entries; nothing to do.");
    } else {
        ctx.status(&format!("Moving {} files...\n", entries.len()));
    }

    let reports = remap_files(&ctx.cli.root, entries, ctx.options(), ctx.observe());
    ctx.finish(&reports);
}

fn history_source(ctx: &CommandContext<'_>) -> Box<dyn HistorySource> {
    if ctx.cli.no_git {
        debug_log("git history fallback disabled by --no-git");
        return Box::new(NoHistory);
    }
    if !GitHistory::is_available() {
        eprintln!("Warning: git not found in PATH; first-commit dates are unavailable");
        return Box::new(NoHistory);
    }
    Box::new(GitHistory::new(&ctx.cli.root))
}

fn handle_rename(ctx: &CommandContext<'_>) {
    let entries = &ctx.plan.renames;
    if entries.is_empty() {
        ctx.status("Plan has no [[rename]] entries; nothing to do.");
    } else {
        ctx.status(&format!("Renaming {} files...\n", entries.len()));
    }

    let history = history_source(ctx);
    let rename_ctx = RenameContext {
        root: &ctx.cli.root,
        history: history.as_ref(),
        timezone: ctx.timezone,
        options: ctx.options(),
    };
    let reports = rename_files(&rename_ctx, entries, ctx.observe());
    ctx.finish(&reports);
}

/// Check preconditions, load the plan and run the selected command
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    debug_log(format_args!("timezone for git timestamps: {timezone:?}"));

    check_repository(&cli.root)?;
    if cli.command == Commands::Rename {
        check_docs_dir(&cli.docs_dir())?;
    }

    let plan_path = Plan::locate(&cli.root, cli.plan.as_deref());
    let plan = Plan::load(&plan_path)?;
    debug_log(format_args!(
        "plan {}: {} move, {} rename entries",
        plan_path.display(),
        plan.moves.len(),
        plan.renames.len()
    ));

    let ctx = CommandContext {
        cli,
        plan: &plan,
        timezone,
    };
    match cli.command {
        Commands::Reorganize => handle_reorganize(&ctx),
        Commands::Rename => handle_rename(&ctx),
    }
    Ok(())
}

pub(crate) fn wait_for_enter() {
    print!("\nPress Enter to exit...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
