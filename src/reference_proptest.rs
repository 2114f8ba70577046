//! Property-based tests for library reference parsing.
//!
//! These tests use proptest to generate descriptor contents and verify that
//! parsing invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::reference::{path_is_ignored, GitReference, LibraryReference};
    use proptest::prelude::*;
    use std::path::PathBuf;

    // ============================================================================
    // GitReference::parse property tests
    // ============================================================================

    proptest! {
        /// Property: a URL and revision joined by '#' split back into the same parts
        #[test]
        fn parse_splits_url_and_revision(
            url in "https://[a-z]{1,12}\\.com/[a-z0-9_-]{1,16}",
            revision in "[a-f0-9]{7,40}",
        ) {
            let parsed = GitReference::parse(&format!("{}#{}", url, revision)).unwrap();
            prop_assert_eq!(parsed.repo_url, url);
            prop_assert_eq!(parsed.revision, Some(revision));
        }

        /// Property: content without '#' never yields a revision
        #[test]
        fn parse_without_fragment_has_no_revision(url in "[a-zA-Z0-9:/._@-]{1,64}") {
            let parsed = GitReference::parse(&url).unwrap();
            prop_assert_eq!(parsed.revision, None);
            prop_assert_eq!(parsed.repo_url, url);
        }

        /// Property: surrounding whitespace never changes the result
        #[test]
        fn parse_ignores_surrounding_whitespace(
            url in "https://[a-z]{1,12}/[a-z]{1,12}",
            pad in "[ \t\n]{0,4}",
        ) {
            let plain = GitReference::parse(&url).unwrap();
            let padded = GitReference::parse(&format!("{}{}{}", pad, url, pad)).unwrap();
            prop_assert_eq!(plain, padded);
        }

        /// Property: parsing never yields an empty URL
        #[test]
        fn parse_never_returns_empty_url(content in ".{0,64}") {
            if let Ok(parsed) = GitReference::parse(&content) {
                prop_assert!(!parsed.repo_url.is_empty());
            }
        }
    }

    // ============================================================================
    // Source path and ignore property tests
    // ============================================================================

    proptest! {
        /// Property: the source directory is a sibling named after the descriptor
        #[test]
        fn source_code_path_is_sibling(
            dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            name in "[a-zA-Z0-9_-]{1,16}",
        ) {
            let reference = LibraryReference::from_reference_file(
                PathBuf::from(&dir).join(format!("{}.lib", name)),
            );
            prop_assert_eq!(&reference.source_code_path, &PathBuf::from(&dir).join(&name));
            prop_assert_eq!(reference.name(), name);
        }

        /// Property: a path containing the ignored segment is always ignored
        #[test]
        fn ignored_segment_anywhere_is_ignored(
            prefix in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
            suffix in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        ) {
            let path = PathBuf::from(&prefix).join("mbed-os").join(&suffix);
            prop_assert!(path_is_ignored(&path, &["mbed-os"]));
        }
    }
}
