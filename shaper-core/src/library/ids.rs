use shaper_model::AuthorID;
use tracing::warn;

use crate::error::{QueryError, Result};

/// Parses an identifier list such as `"(id1, id2)"` or `"id1,id2"`.
///
/// Surrounding parentheses are optional, whitespace around entries is
/// ignored, empty entries are skipped and blank input yields an empty list.
pub fn parse_id_list(raw: &str) -> Result<Vec<AuthorID>> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            AuthorID::from_string(token).map_err(|err| {
                warn!(token, %err, "rejected identifier");
                QueryError::InvalidIdList(format!("'{token}' is not a valid identifier"))
            })
        })
        .collect()
}
