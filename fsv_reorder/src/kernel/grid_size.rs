use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub struct GridSize {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridSize {
    pub fn new(
        x: usize,
        y: usize,
        z: usize,
    ) -> Self {
        Self {
            x,
            y,
            z,
        }
    }

    pub fn volume(&self) -> usize {
        self.x * self.y * self.z
    }

    pub fn as_array(&self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every extent of `self` evenly divides the matching extent of `global`.
    pub fn divides(
        &self,
        global: &GridSize,
    ) -> bool {
        self.as_array()
            .iter()
            .zip(global.as_array())
            .all(|(&local, global)| local != 0 && global % local == 0)
    }
}

impl From<[usize; 3]> for GridSize {
    fn from(extents: [usize; 3]) -> Self {
        Self::new(extents[0], extents[1], extents[2])
    }
}
