//! Title-to-filename helpers.

/// Convert a user-entered title into a filesystem-safe stem.
///
/// Trims surrounding whitespace, replaces `/` with `-` (no subdirectories),
/// and strips leading dots (no hidden files). Falls back to `"Untitled"`
/// when nothing is left. Spaces and other characters are kept as typed.
pub fn sanitize_title(title: &str) -> String {
    let cleaned = title.trim().replace('/', "-");
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "Untitled".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Find the first free stem: `base`, then `base (1)`, `base (2)`, … until
/// the `taken` predicate reports a free name.
///
/// The probe and the subsequent create are not atomic; that race is accepted
/// for a single-user local tool.
pub fn unique_stem<F>(base: &str, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !taken(base) {
        return base.to_string();
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{} ({})", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Sort display names the way the UI lists them: case-insensitively.
pub fn sort_case_insensitive(names: &mut [String]) {
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashes_become_dashes() {
        assert_eq!(sanitize_title("meeting/notes/today"), "meeting-notes-today");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(sanitize_title("  groceries  "), "groceries");
    }

    #[test]
    fn leading_dots_are_stripped() {
        assert_eq!(sanitize_title(".hidden"), "hidden");
        assert_eq!(sanitize_title("...config"), "config");
        // Interior dots survive.
        assert_eq!(sanitize_title("v1.2 notes"), "v1.2 notes");
    }

    #[test]
    fn empty_and_all_dot_titles_fall_back_to_untitled() {
        assert_eq!(sanitize_title(""), "Untitled");
        assert_eq!(sanitize_title("   "), "Untitled");
        assert_eq!(sanitize_title("..."), "Untitled");
    }

    #[test]
    fn unique_stem_skips_taken_names_in_order() {
        let taken = ["Note".to_string(), "Note (1)".to_string()];
        let stem = unique_stem("Note", |s| taken.iter().any(|t| t == s));
        assert_eq!(stem, "Note (2)");
    }

    #[test]
    fn unique_stem_returns_base_when_free() {
        assert_eq!(unique_stem("Fresh", |_| false), "Fresh");
    }

    #[test]
    fn sorting_ignores_case() {
        let mut names = vec!["banana".to_string(), "Apple".to_string()];
        sort_case_insensitive(&mut names);
        assert_eq!(names, vec!["Apple", "banana"]);
    }
}
