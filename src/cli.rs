//! Hook workflow orchestration.
//!
//! This module contains the prepare-commit-msg workflow, kept separate
//! from CLI argument parsing. The decoupling allows the workflow to be
//! called programmatically (and from tests) without depending on clap.

use std::path::PathBuf;

use crate::decision::{self, Action, HookFlags};
use crate::error::Result;
use crate::git_ops::GitRepo;
use crate::issue;
use crate::message::MessageFile;
use crate::ui;

/// Arguments for one hook invocation.
///
/// Mirrors the CLI Args in a format suitable for the workflow logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookArgs {
    /// Path to the commit message file git passed to the hook
    pub message_file: PathBuf,

    /// Branch name override; resolved from the repository when `None`
    pub branch: Option<String>,

    /// Decision flags, CLI merged with config defaults
    pub flags: HookFlags,
}

/// Result of a completed hook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Message left unchanged or rewritten; the commit proceeds
    Completed,
    /// Forced issue id missing; the commit must abort with exit code 1
    Rejected,
}

/// Runs the prepare-commit-msg workflow.
///
/// Resolves the branch name, reads the message file, decides, and applies
/// the action. The message file is never touched on the [HookOutcome::Rejected]
/// path.
///
/// # Arguments
/// * `args` - Hook invocation arguments
///
/// # Returns
/// * `Ok(HookOutcome)` - The decision was applied (or withheld, for `Rejected`)
/// * `Err` - If the repository or the message file is unusable
pub fn run(args: &HookArgs) -> Result<HookOutcome> {
    let branch_name = match &args.branch {
        Some(name) => name.clone(),
        None => GitRepo::new()?.current_branch()?,
    };

    let message_file = MessageFile::new(&args.message_file);
    let message = message_file.read()?;

    match decision::decide(&branch_name, &message, &args.flags) {
        Action::Unchanged => Ok(HookOutcome::Completed),
        Action::Replace(new_message) => {
            message_file.replace(&new_message)?;

            if let Some(issue_id) = issue::match_at_start(&branch_name) {
                ui::display_success(&format!("Tagged commit message with {}", issue_id));
            }

            Ok(HookOutcome::Completed)
        }
        Action::Reject => Ok(HookOutcome::Rejected),
    }
}
