//! Property-based tests for manifest version handling.
//!
//! These tests use proptest to generate manifests and operator input and
//! verify that the rewrite and validation invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::manifest::{
        bump_pubspec, bump_podspec, current_version, validate_version, VersionTemplate,
    };
    use proptest::prelude::*;

    fn triple() -> impl Strategy<Value = String> {
        (0u32..1000, 0u32..1000, 0u32..1000)
            .prop_map(|(major, minor, patch)| format!("{}.{}.{}", major, minor, patch))
    }

    proptest! {
        /// Property: only the version line changes, every other byte is kept
        #[test]
        fn bump_pubspec_preserves_surrounding_bytes(
            before in "[a-z_ :\n]{0,60}",
            after in "\n[a-z_ :\n]{0,60}",
            old in triple(),
            new in triple(),
        ) {
            let text = format!("{}version: {}{}", before, old, after);
            let bumped = bump_pubspec(&text, VersionTemplate::Plain, &new);
            prop_assert_eq!(bumped, format!("{}version: {}{}", before, new, after));
        }

        /// Property: the build template always renders `<new>+<new>`
        #[test]
        fn bump_pubspec_with_build_renders_twice(
            before in "[a-z_ :\n]{0,60}",
            old in triple(),
            new in triple(),
        ) {
            let text = format!("{}version: {}\n", before, old);
            let bumped = bump_pubspec(&text, VersionTemplate::WithBuild, &new);
            prop_assert_eq!(bumped, format!("{}version: {}+{}\n", before, new, new));
        }

        /// Property: a bumped pubspec reports the new version as current
        #[test]
        fn bump_pubspec_then_read_back(old in triple(), new in triple()) {
            let text = format!("name: demo\nversion: {}\n", old);
            let bumped = bump_pubspec(&text, VersionTemplate::Plain, &new);
            prop_assert_eq!(current_version(&bumped), Some(new.as_str()));
        }

        /// Property: the first quoted triple in a podspec becomes the new version
        #[test]
        fn bump_podspec_replaces_quoted_literal(
            before in "[a-z_ =.\n]{0,60}",
            after in "[a-z_ =.\n]{0,60}",
            old in triple(),
            new in triple(),
        ) {
            let text = format!("{}'{}'{}", before, old, after);
            let bumped = bump_podspec(&text, &new);
            prop_assert_eq!(bumped, format!("{}'{}'{}", before, new, after));
        }

        /// Property: well-formed triples always validate
        #[test]
        fn validate_accepts_triples(version in triple()) {
            prop_assert_eq!(validate_version(&version).ok(), Some(version.as_str()));
        }

        /// Property: anything with a non-digit, non-dot character is rejected
        #[test]
        fn validate_rejects_foreign_characters(
            head in "[0-9.]{0,8}",
            bad in "[^0-9.]",
            tail in "[0-9.]{0,8}",
        ) {
            let input = format!("{}{}{}", head, bad, tail);
            let rejected = matches!(
                validate_version(&input),
                Err(Error::InvalidVersion { .. })
            );
            prop_assert!(rejected, "{:?} should be rejected", input);
        }

        /// Property: the wrong number of components is rejected
        #[test]
        fn validate_rejects_wrong_arity(parts in prop::collection::vec(0u32..100, 1..6)) {
            prop_assume!(parts.len() != 3);
            let input = parts
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(".");
            prop_assert!(validate_version(&input).is_err());
        }
    }
}
