//! # Safe Path Resolution
//!
//! The only place where a caller-supplied name turns into a filesystem path.
//! Both the by-identifier lookup (whose filename comes from a scan) and the
//! asset lookup (whose filename comes straight from a query string) go
//! through [`resolve`] before any read.
//!
//! ## Rules
//!
//! The name is lexically normalized: empty and `.` segments are dropped and
//! each `..` cancels the segment before it. The normalized result must be a
//! single plain segment. Anything else is rejected:
//!
//! - absolute names (leading `/` or `\`)
//! - names that normalize to nothing (`""`, `"."`, `"a/.."`)
//! - names that still climb out (`"../x"`, `"a/../../b"`)
//! - names that still contain a separator (`"a/b"`)
//! - names containing a NUL byte
//!
//! Both `/` and `\` count as separators on every platform.

use std::path::{Path, PathBuf};

use crate::error::PathError;

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Normalize `name` and return the single file segment it denotes.
pub fn sanitize(name: &str) -> Result<String, PathError> {
    let reject = |reason: &'static str| {
        Err(PathError::InvalidPath {
            name: name.to_string(),
            reason,
        })
    };

    if name.contains('\0') {
        return reject("contains a NUL byte");
    }
    if name.starts_with(is_separator) {
        return reject("absolute path");
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in name.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    match segments.as_slice() {
        [] => reject("does not name a file"),
        [".."] => reject("parent directory segment"),
        [single] => Ok((*single).to_string()),
        many if many.contains(&"..") => reject("parent directory segment"),
        _ => reject("contains a path separator"),
    }
}

/// Resolve `name` to a path directly inside `base`.
///
/// No filesystem access happens here; a rejected name is never touched.
pub fn resolve(base: &Path, name: &str) -> Result<PathBuf, PathError> {
    Ok(base.join(sanitize(name)?))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whatever is accepted lands directly inside the base directory.
        #[test]
        fn accepted_names_stay_inside_base(name in "[a-z./\\\\]{0,24}") {
            let base = Path::new("/base");
            if let Ok(path) = resolve(base, &name) {
                prop_assert_eq!(path.parent(), Some(base));
                let file = path.file_name().and_then(|f| f.to_str()).unwrap_or_default();
                prop_assert!(!file.is_empty());
                prop_assert!(file != "..");
                prop_assert!(!file.contains('/') && !file.contains('\\'));
            }
        }

        /// A leading climb can never be cancelled by what follows it.
        #[test]
        fn leading_parent_is_always_rejected(rest in "[a-z./]{0,16}") {
            let name = format!("../{rest}");
            prop_assert!(sanitize(&name).is_err());
        }

        /// Sanitizing is idempotent on accepted names.
        #[test]
        fn sanitize_is_idempotent(name in "[a-z.]{1,8}(/[a-z.]{1,8}){0,3}") {
            if let Ok(once) = sanitize(&name) {
                prop_assert_eq!(sanitize(&once).unwrap(), once);
            }
        }
    }
}
