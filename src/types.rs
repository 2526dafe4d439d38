use thiserror::Error;

/// Pixel rectangle a sprite samples from its texture. A sprite body's half
/// size derives from these dimensions rather than an explicit size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextureRect {
    pub width: u32,
    pub height: u32,
}

impl TextureRect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration for a pathfinder instance.
#[derive(Clone, Debug)]
pub struct PathfinderConfig {
    /// Minimum time between consecutive full path recomputations, in the
    /// same unit as the `dt` fed to `update`.
    pub think_interval: f32,
    /// Enable internal timing instrumentation (adds small overhead when true).
    pub enable_timing: bool,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            think_interval: 0.5,
            enable_timing: false,
        }
    }
}

/// Debug/performance statistics accumulated across searches.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchStats {
    /// Number of full A* searches actually run.
    pub searches: u64,
    /// Nodes popped from the open list during the last search.
    pub expanded: usize,
    /// Duration of the last search in milliseconds (0.0 unless timing is on).
    pub last_search_ms: f64,
}

/// Rejected walkability input to graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("walkability bitmap is empty")]
    EmptyGrid,
    #[error("walkability bitmap row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("resolution multiplier must be positive, got {0}")]
    InvalidResolution(f32),
    #[error("resolution multiplier {mult} collapses a {width}x{height} bitmap to zero nodes")]
    DegenerateResolution {
        mult: f32,
        width: usize,
        height: usize,
    },
}
