//! Render timing report.

use std::time::Duration;

/// Timing for one applied stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTiming {
    /// Stage name (see [`crate::effects::Stage::name`]).
    pub name: &'static str,
    /// Frames going into the stage.
    pub input_frames: usize,
    /// Frames coming out of the stage.
    pub output_frames: usize,
    /// Wall time spent in the stage.
    pub elapsed: Duration,
}

/// Summary of a finished render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    /// Stages in the order they ran.
    pub stages: Vec<StageTiming>,
    /// Source frame count.
    pub input_frames: usize,
    /// Rendered frame count.
    pub output_frames: usize,
    /// Wall time for the whole chain.
    pub elapsed: Duration,
}

impl RenderReport {
    pub(crate) fn new(input_frames: usize) -> Self {
        Self {
            stages: Vec::new(),
            input_frames,
            output_frames: input_frames,
            elapsed: Duration::ZERO,
        }
    }

    /// Names of the stages that ran.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name).collect()
    }
}
