use anyhow::Result;
use clap::Parser;

use git_issue_tag::cli::{self, HookArgs, HookOutcome};
use git_issue_tag::config;
use git_issue_tag::decision::{HookFlags, REJECTION_MESSAGE};
use git_issue_tag::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-issue-tag",
    about = "Tag commit messages with the issue id from the current branch"
)]
struct Args {
    #[arg(env = "COMMIT_MSG_FILE", help = "Path to the commit message file")]
    message_file: std::path::PathBuf,

    #[arg(
        long,
        env = "USE_CONVENTIONAL_COMMIT",
        help = "Append the issue id as a 'Closes: #ID' footer instead of a prefix"
    )]
    conventional_commit: bool,

    #[arg(
        long,
        help = "Reject the commit when no issue id is present in the branch or message"
    )]
    force_issue_id: bool,

    #[arg(long, help = "Process merge commits instead of leaving them untouched")]
    no_skip_merge_commit: bool,

    #[arg(
        long,
        env = "PRE_COMMIT_COMMIT_MSG_SOURCE",
        help = "Message source git passes as the second hook argument (e.g. 'merge')"
    )]
    commit_msg_source: Option<String>,

    #[arg(long, hide = true, help = "Branch name override for testing")]
    branch: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Config file supplies the defaults, CLI flags override
    let flags = HookFlags {
        use_conventional_commit: args.conventional_commit || config.use_conventional_commit,
        force_issue_id: args.force_issue_id || config.force_issue_id,
        skip_merge_commit: config.skip_merge_commit && !args.no_skip_merge_commit,
        message_source: args.commit_msg_source,
    };

    let hook_args = HookArgs {
        message_file: args.message_file,
        branch: args.branch,
        flags,
    };

    match cli::run(&hook_args)? {
        HookOutcome::Completed => Ok(()),
        HookOutcome::Rejected => {
            ui::display_error(REJECTION_MESSAGE);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    fn clear_hook_env() {
        std::env::remove_var("COMMIT_MSG_FILE");
        std::env::remove_var("USE_CONVENTIONAL_COMMIT");
        std::env::remove_var("PRE_COMMIT_COMMIT_MSG_SOURCE");
    }

    #[test]
    #[serial]
    fn test_parse_defaults() {
        clear_hook_env();

        let args = Args::try_parse_from(["git-issue-tag", ".git/COMMIT_EDITMSG"])
            .expect("Should parse");
        assert_eq!(args.message_file, PathBuf::from(".git/COMMIT_EDITMSG"));
        assert!(!args.conventional_commit);
        assert!(!args.force_issue_id);
        assert!(!args.no_skip_merge_commit);
        assert_eq!(args.commit_msg_source, None);
        assert_eq!(args.branch, None);
    }

    #[test]
    #[serial]
    fn test_parse_requires_message_file() {
        clear_hook_env();

        assert!(Args::try_parse_from(["git-issue-tag"]).is_err());
    }

    #[test]
    #[serial]
    fn test_parse_flags() {
        clear_hook_env();

        let args = Args::try_parse_from([
            "git-issue-tag",
            ".git/COMMIT_EDITMSG",
            "--conventional-commit",
            "--force-issue-id",
            "--no-skip-merge-commit",
            "--commit-msg-source",
            "merge",
            "--branch",
            "AA-123-fix-bug",
        ])
        .expect("Should parse");
        assert!(args.conventional_commit);
        assert!(args.force_issue_id);
        assert!(args.no_skip_merge_commit);
        assert_eq!(args.commit_msg_source.as_deref(), Some("merge"));
        assert_eq!(args.branch.as_deref(), Some("AA-123-fix-bug"));
    }

    #[test]
    #[serial]
    fn test_message_file_from_environment() {
        clear_hook_env();
        std::env::set_var("COMMIT_MSG_FILE", "/tmp/COMMIT_EDITMSG");

        let args = Args::try_parse_from(["git-issue-tag"]).expect("Should parse");
        assert_eq!(args.message_file, PathBuf::from("/tmp/COMMIT_EDITMSG"));

        clear_hook_env();
    }

    #[test]
    #[serial]
    fn test_message_source_from_environment() {
        clear_hook_env();
        std::env::set_var("PRE_COMMIT_COMMIT_MSG_SOURCE", "merge");

        let args = Args::try_parse_from(["git-issue-tag", ".git/COMMIT_EDITMSG"])
            .expect("Should parse");
        assert_eq!(args.commit_msg_source.as_deref(), Some("merge"));

        clear_hook_env();
    }
}
