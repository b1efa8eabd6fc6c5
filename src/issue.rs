use regex::Regex;

/// Issue identifier pattern: uppercase letters, a hyphen, decimal digits.
/// `ANCHORED_ISSUE_ID` is the same pattern pinned to the start of the input;
/// keep the two in sync.
const ISSUE_ID: &str = "[A-Z]+-[0-9]+";
const ANCHORED_ISSUE_ID: &str = "^[A-Z]+-[0-9]+";

/// An issue tracker identifier such as `AA-123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueId(String);

impl IssueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts an issue id anchored at the very start of a branch name.
///
/// `AA-123-fix-bug` yields `AA-123`; `feature/AA-123` yields nothing - the
/// id must begin at position 0. Matching is case-sensitive.
///
/// # Arguments
/// * `branch_name` - Branch name to extract from
///
/// # Returns
/// * `Some(IssueId)` - Leftmost id starting at the first character
/// * `None` - If the branch name does not start with an id
pub fn match_at_start(branch_name: &str) -> Option<IssueId> {
    let re = Regex::new(ANCHORED_ISSUE_ID).ok()?;

    re.find(branch_name)
        .map(|m| IssueId(m.as_str().to_string()))
}

/// Checks whether an issue id occurs anywhere in the given text.
///
/// Unlike [match_at_start], the search is unanchored.
pub fn found_in(text: &str) -> bool {
    Regex::new(ISSUE_ID)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}
