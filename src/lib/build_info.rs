/// Short form of the commit the bundle was built from, shown in the footer.
pub fn git_commit_hash() -> &'static str {
    match super::built_info::GIT_COMMIT_HASH_SHORT {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn version() -> &'static str {
    super::built_info::PKG_VERSION
}
