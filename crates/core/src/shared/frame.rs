use serde::{Deserialize, Serialize};

use crate::shared::region::Region;

/// One pipeline iteration's worth of detections.
///
/// Pixel data stays with the host; the labeling stage only needs the
/// regions and their inference outputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    index: usize,
    #[serde(default)]
    regions: Vec<Region>,
}

impl Frame {
    pub fn new(index: usize, regions: Vec<Region>) -> Self {
        Self { index, regions }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }
}
