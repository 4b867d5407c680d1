//! Pipeline configuration
//!
//! Loaded from TOML; every field except the two directories has a default.
//!
//! ```toml
//! input_dir = "lines"
//! output_dir = "Detected/lines"
//! space_threshold = 10
//!
//! [groups]
//! small = ["writer03"]
//! large = ["writer11", "writer12"]
//! esmall = ["writer07"]
//! ```

use crate::{PipelineError, PipelineResult};
use inkseg_recog::{GroupMembership, GroupTable, WordSegOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default horizontal merge gap in pixels
pub const DEFAULT_SPACE_THRESHOLD: u32 = 10;

/// Default exclusive minimum word width and height
pub const DEFAULT_MIN_WORD_SIZE: i32 = 10;

/// Default ink threshold
pub const DEFAULT_GRAY_THRESHOLD: u8 = 128;

/// Default number of dilation passes
pub const DEFAULT_DILATE_ITERATIONS: u32 = 2;

/// Settings for one pipeline run
///
/// Missing keys take their defaults; unknown keys are an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Root of the input tree; each immediate subfolder is a dataset
    pub input_dir: PathBuf,
    /// Root of the output tree
    pub output_dir: PathBuf,
    /// Largest horizontal gap in pixels merged into one word
    pub space_threshold: u32,
    /// Words must be strictly wider than this
    pub min_word_width: i32,
    /// Words must be strictly taller than this
    pub min_word_height: i32,
    /// Gray values at or below this are ink
    pub gray_threshold: u8,
    /// Number of brick dilation passes, at least 1
    pub dilate_iterations: u32,
    /// File extensions to process, case-insensitive, without the dot
    pub extensions: Vec<String>,
    /// Dataset folders assigned to a non-default size group
    pub groups: GroupMembership,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            space_threshold: DEFAULT_SPACE_THRESHOLD,
            min_word_width: DEFAULT_MIN_WORD_SIZE,
            min_word_height: DEFAULT_MIN_WORD_SIZE,
            gray_threshold: DEFAULT_GRAY_THRESHOLD,
            dilate_iterations: DEFAULT_DILATE_ITERATIONS,
            extensions: vec!["png".to_string()],
            groups: GroupMembership::default(),
        }
    }
}

impl PipelineConfig {
    /// Defaults with the given input and output roots
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> PipelineResult<Self> {
        toml::from_str(contents)
            .map_err(|e| PipelineError::Config(format!("failed to parse config: {e}")))
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check the configuration before any image is touched
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.input_dir.is_dir() {
            return Err(PipelineError::Config(format!(
                "input directory does not exist: {}",
                self.input_dir.display()
            )));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(PipelineError::Config("output directory is not set".to_string()));
        }
        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(PipelineError::Config("no file extensions configured".to_string()));
        }
        self.groups
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        self.word_seg_options()
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Segmentation options derived from this configuration
    pub fn word_seg_options(&self) -> WordSegOptions {
        WordSegOptions::default()
            .with_space_threshold(self.space_threshold)
            .with_min_word_size(self.min_word_width, self.min_word_height)
            .with_gray_threshold(self.gray_threshold)
            .with_dilate_iterations(self.dilate_iterations)
    }

    /// Folder to size group lookup
    pub fn group_table(&self) -> PipelineResult<GroupTable> {
        GroupTable::try_from(&self.groups).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// True if `path` has one of the configured extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.space_threshold, 10);
        assert_eq!((config.min_word_width, config.min_word_height), (10, 10));
        assert_eq!(config.gray_threshold, 128);
        assert_eq!(config.dilate_iterations, 2);
        assert_eq!(config.extensions, vec!["png".to_string()]);
    }

    #[test]
    fn test_parse_partial() {
        let config = PipelineConfig::from_toml_str(
            r#"
            input_dir = "in"
            output_dir = "out"
            space_threshold = 6

            [groups]
            large = ["wide"]
            "#,
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.space_threshold, 6);
        assert_eq!(config.dilate_iterations, 2);
        assert_eq!(config.groups.large, vec!["wide".to_string()]);
        assert!(config.groups.small.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = PipelineConfig::from_toml_str("space_treshold = 3").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_validate() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PipelineConfig::new(dir.path(), dir.path().join("out"));
        assert!(config.validate().is_ok());

        config.groups.small.push("x".into());
        config.groups.large.push("x".into());
        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));
        config.groups = GroupMembership::default();

        config.dilate_iterations = 0;
        assert!(config.validate().is_err());
        config.dilate_iterations = 1;

        config.extensions.clear();
        assert!(config.validate().is_err());
        config.extensions.push("png".into());

        config.input_dir = dir.path().join("missing");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inkseg.toml");
        std::fs::write(&path, "output_dir = \"o\"\nextensions = [\"PNG\", \".jpg\"]\n").unwrap();
        let config = PipelineConfig::load(&path).unwrap();
        assert!(config.matches_extension(Path::new("a/b.png")));
        assert!(config.matches_extension(Path::new("c.JPG")));
        assert!(!config.matches_extension(Path::new("notes.txt")));
        assert!(!config.matches_extension(Path::new("README")));
        assert!(PipelineConfig::load(&dir.path().join("nope.toml")).is_err());
    }
}
