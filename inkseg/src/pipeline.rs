//! Pipeline driver
//!
//! Walks the input tree one dataset folder at a time, segments every
//! matching image into words, and writes each accepted word as its own PNG
//! under the output tree:
//!
//! ```text
//! <input>/<folder>/<rel>/<stem>.png  ->  <output>/<folder>/<rel>/<stem>_000.png
//!                                        <output>/<folder>/<rel>/<stem>_001.png
//! ```
//!
//! An image whose extension is anything but lowercase `png` keeps it in
//! the name (`line.jpg` -> `line_jpg_000.png`), so inputs sharing a stem do
//! not share crops. Word images left by an earlier run for the same input
//! are removed before the new ones are written.
//!
//! Images are processed one after the other. An unreadable image is logged
//! and skipped; a failed write, or two inputs claiming the same output
//! file, stops the run.

use crate::{PipelineConfig, PipelineError, PipelineResult};
use inkseg_core::{Box, Pix};
use inkseg_io::{ImageFormat, IoError, read_image, write_image};
use inkseg_recog::{GroupTable, RecogError, SizeGroup, WordSegResult, WordSegmenter};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Counters for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Dataset folders visited
    pub folders: usize,
    /// Images decoded and segmented
    pub images_processed: usize,
    /// Images skipped because they could not be decoded
    pub images_skipped: usize,
    /// Word images written
    pub words_written: usize,
}

/// A validated pipeline ready to run
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    groups: GroupTable,
    segmenter: WordSegmenter,
}

/// Word image files written so far in one run
type Claimed = HashSet<PathBuf>;

/// Common prefix of the word images of the input `<stem>.<ext>`
fn word_prefix(stem: &str, ext: &str) -> String {
    if ext.is_empty() || ext == ImageFormat::Png.extension() {
        stem.to_string()
    } else {
        format!("{stem}_{ext}")
    }
}

/// File name of the `ordinal`-th accepted word of the input `<stem>.<ext>`
pub fn word_file_name(stem: &str, ext: &str, ordinal: usize) -> String {
    format!(
        "{}_{ordinal:03}.{}",
        word_prefix(stem, ext),
        ImageFormat::Png.extension()
    )
}

/// True if `name` is `<prefix>_<ordinal>.png` as built by [`word_file_name`]
fn is_word_file_of(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.strip_suffix(".png"))
        .is_some_and(|digits| digits.len() >= 3 && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn write_error(path: &Path, source: io::Error) -> PipelineError {
    PipelineError::Write {
        path: path.to_path_buf(),
        source: IoError::Io(source),
    }
}

impl Pipeline {
    /// Validate `config` and prepare the segmenter and group lookup
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        config.validate()?;
        let groups = config.group_table()?;
        let segmenter = WordSegmenter::new(config.word_seg_options())
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        Ok(Self {
            config,
            groups,
            segmenter,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process every dataset folder under the input root
    pub fn run(&self) -> PipelineResult<RunSummary> {
        let mut summary = RunSummary::default();
        let mut claimed = Claimed::new();
        for folder in self.dataset_folders()? {
            let name = folder
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let group = self.groups.group_for(&name);
            info!(folder = %name, %group, "processing folder");
            self.process_folder(&folder, &name, group, &mut summary, &mut claimed)?;
            summary.folders += 1;
        }
        info!(
            folders = summary.folders,
            processed = summary.images_processed,
            skipped = summary.images_skipped,
            words = summary.words_written,
            "run complete"
        );
        Ok(summary)
    }

    /// Immediate subdirectories of the input root, sorted by name
    fn dataset_folders(&self) -> PipelineResult<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.config.input_dir).map_err(|e| {
            PipelineError::Config(format!(
                "cannot list {}: {e}",
                self.config.input_dir.display()
            ))
        })?;
        let mut folders = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PipelineError::Config(e.to_string()))?;
            let path = entry.path();
            if path.is_dir() {
                folders.push(path);
            } else {
                debug!(path = %path.display(), "ignoring file outside dataset folders");
            }
        }
        folders.sort();
        Ok(folders)
    }

    fn process_folder(
        &self,
        folder: &Path,
        name: &str,
        group: SizeGroup,
        summary: &mut RunSummary,
        claimed: &mut Claimed,
    ) -> PipelineResult<()> {
        let out_root = self.config.output_dir.join(name);
        let walker = WalkDir::new(folder).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "cannot read directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !self.config.matches_extension(path) {
                continue;
            }

            let rel_dir = path
                .parent()
                .and_then(|p| p.strip_prefix(folder).ok())
                .unwrap_or_else(|| Path::new(""));
            let out_dir = out_root.join(rel_dir);

            match self.process_image(path, group, &out_dir, claimed) {
                Ok(written) => {
                    summary.images_processed += 1;
                    summary.words_written += written;
                }
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "skipping image");
                    summary.images_skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Segment one image and write its word crops into `out_dir`
    ///
    /// Returns the number of word images written.
    fn process_image(
        &self,
        path: &Path,
        group: SizeGroup,
        out_dir: &Path,
        claimed: &mut Claimed,
    ) -> PipelineResult<usize> {
        let pix = decode(path)?;
        let result = self.segmenter.segment(&pix, group)?;

        let lossy = |s: Option<&std::ffi::OsStr>| {
            s.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        };
        let stem = lossy(path.file_stem());
        let ext = lossy(path.extension());
        remove_stale_words(out_dir, &word_prefix(&stem, &ext), claimed)?;

        if result.words.is_empty() {
            debug!(path = %path.display(), "no words found");
            return Ok(0);
        }
        fs::create_dir_all(out_dir).map_err(|e| write_error(out_dir, e))?;

        for (ordinal, word) in result.words.iter().enumerate() {
            let target = out_dir.join(word_file_name(&stem, &ext, ordinal));
            if !claimed.insert(target.clone()) {
                return Err(write_error(
                    &target,
                    io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!(
                            "word image already written; {} maps to the same name",
                            path.display()
                        ),
                    ),
                ));
            }
            save_crop(&pix, word, &target)?;
            info!(path = %target.display(), x = word.x, y = word.y, w = word.w, h = word.h, "saved word");
        }
        Ok(result.words.len())
    }

    /// Segment one image without writing anything
    pub fn inspect(&self, path: &Path, group: SizeGroup) -> PipelineResult<WordSegResult> {
        let pix = decode(path)?;
        Ok(self.segmenter.segment(&pix, group)?)
    }
}

fn decode(path: &Path) -> PipelineResult<Pix> {
    read_image(path).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Delete word images of `prefix` in `out_dir` not written by this run
fn remove_stale_words(out_dir: &Path, prefix: &str, claimed: &Claimed) -> PipelineResult<()> {
    let entries = match fs::read_dir(out_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(write_error(out_dir, e)),
    };
    for entry in entries {
        let path = entry.map_err(|e| write_error(out_dir, e))?.path();
        let stale = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| is_word_file_of(n, prefix));
        if stale && path.is_file() && !claimed.contains(&path) {
            fs::remove_file(&path).map_err(|e| write_error(&path, e))?;
            debug!(path = %path.display(), "removed stale word image");
        }
    }
    Ok(())
}

fn save_crop(pix: &Pix, word: &Box, target: &Path) -> PipelineResult<()> {
    let crop = pix
        .clip_rectangle(word)
        .map_err(|e| PipelineError::Segment(RecogError::Core(e)))?;
    write_image(&crop, target, ImageFormat::Png).map_err(|source| PipelineError::Write {
        path: target.to_path_buf(),
        source,
    })
}

/// Validate `config` and run the whole pipeline
pub fn run(config: PipelineConfig) -> PipelineResult<RunSummary> {
    Pipeline::new(config)?.run()
}
