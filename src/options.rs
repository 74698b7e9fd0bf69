use serde::{Deserialize, Serialize};
use std::path::PathBuf;
pub const DEFAULT_SPACES_PER_TAB: usize = 4;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceMode {
    #[default]
    None,
    SpacesToTabs,
    TabsToSpaces,
}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineMode {
    #[default]
    None,
    ToDos,
    ToUnix,
}
/// What to rewrite in each file.
///
/// A `spaces_per_tab` of zero is accepted and disables space conversion in
/// both directions; line-ending conversion still applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub spaces_per_tab: usize,
    pub space_mode: SpaceMode,
    pub line_mode: LineMode,
    pub recursive: bool,
}
impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            spaces_per_tab: DEFAULT_SPACES_PER_TAB,
            space_mode: SpaceMode::None,
            line_mode: LineMode::None,
            recursive: false,
        }
    }
}
impl ConversionConfig {
    pub fn has_conversion(&self) -> bool {
        self.space_mode != SpaceMode::None || self.line_mode != LineMode::None
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacetabOptions {
    pub root: PathBuf,
    pub file: Option<PathBuf>,
    pub conversion: ConversionConfig,
    pub forward_slashes: bool,
    pub follow_links: bool,
    pub respect_gitignore: bool,
    pub ignore_patterns: Vec<String>,
    pub jobs: Option<usize>,
}
impl Default for SpacetabOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file: None,
            conversion: ConversionConfig::default(),
            forward_slashes: false,
            follow_links: false,
            respect_gitignore: false,
            ignore_patterns: Vec::new(),
            jobs: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct SpacetabBuilder {
    options: SpacetabOptions,
}
impl SpacetabBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SpacetabOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn file(mut self, name: Option<PathBuf>) -> Self {
        self.options.file = name;
        self
    }
    pub fn recursive(mut self, yes: bool) -> Self {
        self.options.conversion.recursive = yes;
        self
    }
    pub fn spaces_per_tab(mut self, count: usize) -> Self {
        self.options.conversion.spaces_per_tab = count;
        self
    }
    pub fn space_mode(mut self, mode: SpaceMode) -> Self {
        self.options.conversion.space_mode = mode;
        self
    }
    pub fn line_mode(mut self, mode: LineMode) -> Self {
        self.options.conversion.line_mode = mode;
        self
    }
    pub fn forward_slashes(mut self, yes: bool) -> Self {
        self.options.forward_slashes = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.options.jobs = jobs;
        self
    }
    pub fn build(self) -> SpacetabOptions {
        self.options
    }
}
