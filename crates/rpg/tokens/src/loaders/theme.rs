//! Counter theme loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::theme::CounterTheme;

/// Loads counter themes from TOML files.
pub struct ThemeLoader;

impl ThemeLoader {
    /// Reads and validates a theme.
    ///
    /// The file holds a `background` path and a `digits` array of ten paths.
    pub fn load(path: &Path) -> LoadResult<CounterTheme> {
        let content = read_file(path)?;
        let theme: CounterTheme = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse theme TOML: {}", e))?;
        theme
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid theme {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded counter theme");
        Ok(theme)
    }
}
