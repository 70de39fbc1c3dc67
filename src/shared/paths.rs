//! Project-relative path helpers
//!
//! Hook events carry whatever path the assistant used, usually absolute.
//! Matching and reporting work on paths relative to the project directory.

use std::path::Path;

/// Strip the project directory from `file_path`.
///
/// Paths outside the project, and paths that are already relative, are
/// returned unchanged.
pub fn relative_to_project(file_path: &str, project_dir: &Path) -> String {
    match Path::new(file_path).strip_prefix(project_dir) {
        Ok(relative) => relative
            .to_string_lossy()
            .trim_start_matches('/')
            .to_string(),
        Err(_) => file_path.to_string(),
    }
}

/// [`relative_to_project`] for a path value
pub fn display_relative(path: &Path, project_dir: &Path) -> String {
    relative_to_project(&path.to_string_lossy(), project_dir)
}

/// Last segment of a slash-separated path
pub fn base_name(file_path: &str) -> &str {
    file_path.rsplit('/').next().unwrap_or(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_to_project() {
        let project = Path::new("/srv/shop");

        assert_eq!(relative_to_project("/srv/shop/app/Models/Item.php", project), "app/Models/Item.php");
        assert_eq!(relative_to_project("app/Models/Item.php", project), "app/Models/Item.php");
        assert_eq!(relative_to_project("/srv/other/app/Item.php", project), "/srv/other/app/Item.php");
        // component-wise, not a string prefix
        assert_eq!(relative_to_project("/srv/shopping/app/Item.php", project), "/srv/shopping/app/Item.php");
    }

    #[test]
    fn test_display_relative() {
        let project = PathBuf::from("/srv/shop");
        let candidate = project.join("tests/Unit/Services/FooTest.php");

        assert_eq!(display_relative(&candidate, &project), "tests/Unit/Services/FooTest.php");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/srv/shop/.env.production"), ".env.production");
        assert_eq!(base_name("composer.json"), "composer.json");
        assert_eq!(base_name("config/"), "");
    }
}
