use std::path::PathBuf;

use tracing::warn;

use crate::capture::FrameSource;
use crate::error::{FundusError, Result};
use crate::frame::Frame;

use super::image_io::load_frame;

/// Replays a list of still images as if they came from a live camera.
///
/// Each grab yields the next file. Once the list is exhausted, grabs return
/// nothing. Files that fail to decode are reported as failed grabs when
/// `skip_undecodable` is set, and as errors otherwise.
pub struct FileSequence {
    paths: Vec<PathBuf>,
    next: usize,
    skip_undecodable: bool,
}

impl FileSequence {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            next: 0,
            skip_undecodable: false,
        }
    }

    pub fn skip_undecodable(mut self, skip: bool) -> Self {
        self.skip_undecodable = skip;
        self
    }

    pub fn remaining(&self) -> usize {
        self.paths.len().saturating_sub(self.next)
    }
}

impl FrameSource for FileSequence {
    fn take_frame(&mut self) -> Result<Option<Frame>> {
        let Some(path) = self.paths.get(self.next) else {
            return Ok(None);
        };
        self.next += 1;

        match load_frame(path) {
            Ok(frame) => Ok(Some(frame)),
            Err(FundusError::Decode(e)) if self.skip_undecodable => {
                warn!(path = %path.display(), error = %e, "Skipping undecodable frame");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
