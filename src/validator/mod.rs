mod types;

pub use types::*;

use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Check an edited name list against the original one and pair them up.
///
/// The scan stops at the first problem; any problem rejects the whole list.
/// Nothing on disk is consulted, so names the filesystem itself refuses
/// (containing a NUL byte, or over the name length limit) pass here and fail
/// during the stage-in move, leaving the staging directory behind.
pub fn validate(old_names: &[String], new_names: &[String]) -> Result<RenameMapping, ValidationError> {
    if old_names.len() != new_names.len() {
        warn!(
            expected = old_names.len(),
            actual = new_names.len(),
            "Name count mismatch"
        );
        return Err(ValidationError::CountMismatch {
            expected: old_names.len(),
            actual: new_names.len(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(new_names.len());

    for (index, name) in new_names.iter().enumerate() {
        let line = index + 1;

        if let Err(e) = check_name(name, line, &seen) {
            warn!(line, name = %name, "Rejected edited name");
            return Err(e);
        }

        debug!(line, name = %name, "Accepted name");
        seen.insert(name.as_str());
    }

    let pairs = old_names
        .iter()
        .zip(new_names)
        .map(|(old, new)| RenamePair {
            old_name: old.clone(),
            new_name: new.clone(),
        })
        .collect::<Vec<_>>();

    let mapping = RenameMapping { pairs };

    info!(
        count = mapping.len(),
        changed = mapping.changed_count(),
        "Validation passed"
    );

    Ok(mapping)
}

fn check_name(name: &str, line: usize, seen: &HashSet<&str>) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName { line });
    }
    if name.chars().any(std::path::is_separator) {
        return Err(ValidationError::PathSeparatorInName { line });
    }
    if name == "." || name == ".." {
        return Err(ValidationError::ReservedName { line });
    }
    if seen.contains(name) {
        return Err(ValidationError::DuplicateName { line });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_valid_list() {
        let old = names(&["a", "b", "c"]);
        let new = names(&["b", "c", "a"]);

        let mapping = validate(&old, &new).unwrap();

        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.pairs[0].old_name, "a");
        assert_eq!(mapping.pairs[0].new_name, "b");
        assert_eq!(mapping.pairs[2].old_name, "c");
        assert_eq!(mapping.pairs[2].new_name, "a");
        assert_eq!(mapping.changed_count(), 3);
    }

    #[test]
    fn test_validate_unchanged_names() {
        let old = names(&["keep", "rename"]);
        let new = names(&["keep", "renamed"]);

        let mapping = validate(&old, &new).unwrap();

        assert!(mapping.pairs[0].is_unchanged());
        assert_eq!(mapping.changed_count(), 1);
    }

    #[test]
    fn test_validate_empty_lists() {
        let mapping = validate(&[], &[]).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_count_mismatch_wins_over_entry_errors() {
        let old = names(&["a", "b"]);
        let new = names(&["", "b", "b"]);

        let result = validate(&old, &new);

        assert_eq!(
            result,
            Err(ValidationError::CountMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_empty_name() {
        let old = names(&["a", "b", "c"]);
        let new = names(&["x", "", "z"]);

        let err = validate(&old, &new).unwrap_err();

        assert_eq!(err, ValidationError::EmptyName { line: 2 });
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_path_separator() {
        let old = names(&["a", "b"]);
        let new = names(&["x", "sub/y"]);

        assert_eq!(
            validate(&old, &new),
            Err(ValidationError::PathSeparatorInName { line: 2 })
        );
    }

    #[test]
    fn test_reserved_names() {
        let old = names(&["a", "b"]);

        assert_eq!(
            validate(&old, &names(&[".", "b"])),
            Err(ValidationError::ReservedName { line: 1 })
        );
        assert_eq!(
            validate(&old, &names(&["a", ".."])),
            Err(ValidationError::ReservedName { line: 2 })
        );
    }

    #[test]
    fn test_dotted_names_are_allowed() {
        let old = names(&["a", "b"]);
        let new = names(&["...", ".hidden"]);

        assert!(validate(&old, &new).is_ok());
    }

    #[test]
    fn test_duplicate_reports_second_occurrence() {
        let old = names(&["a", "b", "c", "d"]);
        let new = names(&["w", "x", "y", "x"]);

        assert_eq!(
            validate(&old, &new),
            Err(ValidationError::DuplicateName { line: 4 })
        );
    }

    #[test]
    fn test_first_error_is_reported() {
        let old = names(&["a", "b", "c"]);
        let new = names(&["a/b", "", "."]);

        assert_eq!(
            validate(&old, &new),
            Err(ValidationError::PathSeparatorInName { line: 1 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::CountMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "Edited list has 2 names, expected 3"
        );
        assert_eq!(
            ValidationError::DuplicateName { line: 7 }.to_string(),
            "Line 7: duplicate filename"
        );
    }
}
