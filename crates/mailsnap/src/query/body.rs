//! Body text search

use super::{fold, folder_messages};
use crate::error::QueryError;
use crate::models::{Message, Snapshot};

/// Messages whose body contains `needle`, ignoring case and surrounding
/// whitespace. Each message appears at most once.
pub fn find_by_body_substring<'a>(
    snapshot: &'a Snapshot,
    needle: &str,
    folder_name: &str,
) -> Result<Vec<&'a Message>, QueryError> {
    let needle = fold(needle);
    Ok(folder_messages(snapshot, folder_name)?
        .filter(|msg| fold(&msg.body).contains(&needle))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::snapshot;

    #[test]
    fn test_find_case_insensitive() {
        let snapshot = snapshot();
        let found = find_by_body_substring(&snapshot, "fasdf", "Inbox").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "Hello FASDF world");
    }

    #[test]
    fn test_find_trims_needle() {
        let snapshot = snapshot();
        let found = find_by_body_substring(&snapshot, "  see ", "Inbox").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sequence_number, 4);
    }

    #[test]
    fn test_find_no_match() {
        let snapshot = snapshot();
        assert!(find_by_body_substring(&snapshot, "zzz", "Inbox").unwrap().is_empty());
    }

    #[test]
    fn test_find_unknown_folder() {
        assert!(find_by_body_substring(&snapshot(), "fasdf", "inbox").is_err());
    }
}
