use std::sync::LazyLock;

use regex::Regex;

const MAX_LOCAL_PART: usize = 64;
const MAX_ADDRESS: usize = 254;

/// Dot-atom local part, then one or more hostname labels and a TLD label that
/// starts with a letter.
static MAILBOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .unwrap()
});

pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.len() > MAX_ADDRESS {
        return false;
    }
    let Some((local, _)) = candidate.rsplit_once('@') else {
        return false;
    };
    local.len() <= MAX_LOCAL_PART && MAILBOX_RE.is_match(candidate)
}
