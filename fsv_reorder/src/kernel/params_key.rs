use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ReorderArguments;
use crate::{DataLayout, DataType, ReorderError, ReorderResult};

/// Declares which data types, layouts and tensor features a kernel accepts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct ParamsKey {
    pub input_data_types: BTreeSet<DataType>,
    pub output_data_types: BTreeSet<DataType>,
    pub input_layouts: BTreeSet<DataLayout>,
    pub output_layouts: BTreeSet<DataLayout>,
    pub batching: bool,
    pub tensor_offset: bool,
    pub tensor_pitches: bool,
}

impl ParamsKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_input_data_type(
        &mut self,
        data_type: DataType,
    ) -> &mut Self {
        self.input_data_types.insert(data_type);
        self
    }

    pub fn enable_output_data_type(
        &mut self,
        data_type: DataType,
    ) -> &mut Self {
        self.output_data_types.insert(data_type);
        self
    }

    pub fn enable_input_layout(
        &mut self,
        layout: DataLayout,
    ) -> &mut Self {
        self.input_layouts.insert(layout);
        self
    }

    pub fn enable_output_layout(
        &mut self,
        layout: DataLayout,
    ) -> &mut Self {
        self.output_layouts.insert(layout);
        self
    }

    pub fn enable_batching(&mut self) -> &mut Self {
        self.batching = true;
        self
    }

    pub fn enable_tensor_offset(&mut self) -> &mut Self {
        self.tensor_offset = true;
        self
    }

    pub fn enable_tensor_pitches(&mut self) -> &mut Self {
        self.tensor_pitches = true;
        self
    }

    pub fn supports_input(
        &self,
        data_type: DataType,
        layout: DataLayout,
    ) -> bool {
        self.input_data_types.contains(&data_type) && self.input_layouts.contains(&layout)
    }

    pub fn supports_output(
        &self,
        data_type: DataType,
        layout: DataLayout,
    ) -> bool {
        self.output_data_types.contains(&data_type) && self.output_layouts.contains(&layout)
    }

    /// Fails with the first property of `arguments` this key does not cover.
    pub fn check(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<()> {
        let input = &arguments.input;
        let output = &arguments.output;

        if !self.input_data_types.contains(&input.data_type) {
            return Err(ReorderError::unsupported(format!("input data type {:?}", input.data_type)));
        }
        if !self.output_data_types.contains(&output.data_type) {
            return Err(ReorderError::unsupported(format!("output data type {:?}", output.data_type)));
        }
        if !self.input_layouts.contains(&input.layout) {
            return Err(ReorderError::unsupported(format!("input layout {}", input.layout)));
        }
        if !self.output_layouts.contains(&output.layout) {
            return Err(ReorderError::unsupported(format!("output layout {}", output.layout)));
        }

        for tensor in [input, output] {
            if !self.batching && tensor.batch() > 1 {
                return Err(ReorderError::unsupported(format!("batch of {} without batching support", tensor.batch())));
            }
            if !self.tensor_offset && tensor.offset != 0 {
                return Err(ReorderError::unsupported(format!("tensor offset {}", tensor.offset)));
            }
            if !self.tensor_pitches && tensor.pitches.is_some() {
                return Err(ReorderError::unsupported("explicit tensor pitches"));
            }
        }
        Ok(())
    }
}
