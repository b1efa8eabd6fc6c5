//! Commit message rewrite decision logic.
//!
//! `decide` is a pure function from branch name, message text, and flags
//! to a single [Action]. All side effects (file mutation, process exit)
//! belong to the calling code.

use crate::issue;

/// Message source token git passes to prepare-commit-msg for merge commits.
pub const MERGE_SOURCE: &str = "merge";

/// Rejection line printed when `force_issue_id` finds no id anywhere.
pub const REJECTION_MESSAGE: &str =
    "An issue id is mandatory to commit, please add it to the commit message";

/// Flags controlling how a commit message is prepared.
///
/// Mirrors the CLI surface in a format suitable for the decision logic,
/// decoupled from clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookFlags {
    /// Append the issue id as a `Closes: #ID` footer instead of a prefix
    pub use_conventional_commit: bool,

    /// Reject the commit when no issue id is present anywhere
    pub force_issue_id: bool,

    /// Leave merge commits untouched
    pub skip_merge_commit: bool,

    /// Message source token, compared literally against [MERGE_SOURCE]
    pub message_source: Option<String>,
}

impl Default for HookFlags {
    fn default() -> Self {
        HookFlags {
            use_conventional_commit: false,
            force_issue_id: false,
            skip_merge_commit: true,
            message_source: None,
        }
    }
}

/// Outcome of a decision: leave the message alone, replace it wholesale,
/// or reject the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Unchanged,
    Replace(String),
    Reject,
}

/// Decides what to do with a commit message.
///
/// Rules are evaluated in this order:
/// 1. Merge commits are skipped outright when `skip_merge_commit` is set,
///    before any other rule - a merge commit is never rejected.
/// 2. An issue id anchored at the start of the branch name is injected
///    into the message, unless the id is already present (idempotent, so
///    amended commits are not tagged twice).
/// 3. With `force_issue_id`, a commit whose branch and message both carry
///    no id is rejected. The message search is unanchored, unlike the
///    branch match.
/// 4. Anything else passes through untouched.
///
/// # Arguments
/// * `branch_name` - Current branch name, or a placeholder when detached
/// * `message` - Full commit message text
/// * `flags` - Behavioral flags for this invocation
pub fn decide(branch_name: &str, message: &str, flags: &HookFlags) -> Action {
    if flags.skip_merge_commit && flags.message_source.as_deref() == Some(MERGE_SOURCE) {
        return Action::Unchanged;
    }

    if let Some(issue_id) = issue::match_at_start(branch_name) {
        if message.contains(issue_id.as_str()) {
            return Action::Unchanged;
        }

        if flags.use_conventional_commit {
            return Action::Replace(format!("{}\n\nCloses: #{}", message, issue_id));
        }

        return Action::Replace(format!("[{}] - {}", issue_id, message));
    }

    if flags.force_issue_id && !issue::found_in(message) {
        return Action::Reject;
    }

    Action::Unchanged
}
