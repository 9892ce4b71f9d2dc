use serde::{Deserialize, Serialize};

use crate::{DataLayout, DataType};

/// Logical extents of a 4D (`b, f, y, x`) or 5D (`b, f, z, y, x`) tensor.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TensorShape {
    pub batch: usize,
    pub feature: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    pub height: usize,
    pub width: usize,
}

impl TensorShape {
    pub fn new_2d(
        batch: usize,
        feature: usize,
        height: usize,
        width: usize,
    ) -> Self {
        Self {
            batch,
            feature,
            depth: None,
            height,
            width,
        }
    }

    pub fn new_3d(
        batch: usize,
        feature: usize,
        depth: usize,
        height: usize,
        width: usize,
    ) -> Self {
        Self {
            batch,
            feature,
            depth: Some(depth),
            height,
            width,
        }
    }

    pub fn rank(&self) -> usize {
        if self.depth.is_some() {
            5
        } else {
            4
        }
    }

    /// Extents in `b, f, (z,) y, x` order.
    pub fn dims(&self) -> Vec<usize> {
        let mut dims = vec![self.batch, self.feature];
        dims.extend(self.depth);
        dims.push(self.height);
        dims.push(self.width);
        dims
    }

    pub fn axis_names(&self) -> &'static [&'static str] {
        if self.depth.is_some() {
            &["BATCH", "FEATURE", "Z", "Y", "X"]
        } else {
            &["BATCH", "FEATURE", "Y", "X"]
        }
    }

    pub fn depth_or_one(&self) -> usize {
        self.depth.unwrap_or(1)
    }

    pub fn element_count(&self) -> usize {
        self.dims().iter().product()
    }

    pub fn has_zero_extent(&self) -> bool {
        self.dims().contains(&0)
    }

    /// Compares extents treating a missing depth as depth 1.
    pub fn same_extents(
        &self,
        other: &TensorShape,
    ) -> bool {
        self.batch == other.batch
            && self.feature == other.feature
            && self.depth_or_one() == other.depth_or_one()
            && self.height == other.height
            && self.width == other.width
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct TensorDescriptor {
    pub data_type: DataType,
    pub layout: DataLayout,
    pub shape: TensorShape,
    /// Element offset of the first logical element inside the buffer.
    #[serde(default)]
    pub offset: usize,
    /// Element pitches in [`TensorShape::dims`] order for non-dense tensors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitches: Option<Vec<usize>>,
}

impl TensorDescriptor {
    pub fn new(
        data_type: DataType,
        layout: DataLayout,
        shape: TensorShape,
    ) -> Self {
        Self {
            data_type,
            layout,
            shape,
            offset: 0,
            pitches: None,
        }
    }

    pub fn with_offset(
        mut self,
        offset: usize,
    ) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_pitches(
        mut self,
        pitches: Vec<usize>,
    ) -> Self {
        self.pitches = Some(pitches);
        self
    }

    pub fn element_size(&self) -> usize {
        self.data_type.size_in_bytes()
    }

    /// Number of dimensions implied by the layout, which may exceed the shape rank.
    pub fn rank(&self) -> usize {
        self.layout.dimension_count()
    }

    pub fn batch(&self) -> usize {
        self.shape.batch
    }

    pub fn feature(&self) -> usize {
        self.shape.feature
    }

    pub fn z(&self) -> usize {
        self.shape.depth_or_one()
    }

    pub fn y(&self) -> usize {
        self.shape.height
    }

    pub fn x(&self) -> usize {
        self.shape.width
    }
}
