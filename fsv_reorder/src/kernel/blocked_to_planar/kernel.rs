use std::sync::OnceLock;

use super::{
    BlockedToPlanarConfig, ChannelAlignmentPolicy,
    specialization::Specialization,
    tile_configuration::{TileConfiguration, fsv_alignment},
};
use crate::{
    DataLayout, DataType, DispatchDescriptor, JitConstants, KernelPriority, ParamsKey, ReorderArguments,
    ReorderCore, ReorderResult, kernel::base,
};

const SUPPORTED_DATA_TYPES: [DataType; 9] = [
    DataType::F16,
    DataType::F32,
    DataType::U8,
    DataType::U16,
    DataType::U32,
    DataType::I8,
    DataType::I16,
    DataType::I32,
    DataType::I64,
];

static SUPPORTED_KEY: OnceLock<ParamsKey> = OnceLock::new();

fn supported_key() -> &'static ParamsKey {
    SUPPORTED_KEY.get_or_init(|| {
        let mut key = ParamsKey::new();
        for data_type in SUPPORTED_DATA_TYPES {
            key.enable_input_data_type(data_type);
            key.enable_output_data_type(data_type);
        }

        key.enable_input_layout(DataLayout::BFsYxFsv16);
        key.enable_input_layout(DataLayout::BFsZyxFsv16);

        key.enable_output_layout(DataLayout::Bfyx);
        key.enable_output_layout(DataLayout::Bfzyx);
        key.enable_output_layout(DataLayout::Bfwzyx);

        key.enable_batching().enable_tensor_offset().enable_tensor_pitches();
        key
    })
}

/// Reorders `b_fs_yx_fsv16` / `b_fs_zyx_fsv16` tensors into planar layouts
/// by transposing square tiles through local memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockedToPlanarKernel {
    config: BlockedToPlanarConfig,
}

impl BlockedToPlanarKernel {
    pub fn new(config: BlockedToPlanarConfig) -> Self {
        Self {
            config,
        }
    }

    pub fn config(&self) -> &BlockedToPlanarConfig {
        &self.config
    }

    pub fn tile_configuration(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<TileConfiguration> {
        TileConfiguration::select(&self.config, arguments)
    }

    pub fn specialization(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<Specialization> {
        let tile = self.tile_configuration(arguments)?;
        let dispatch = DispatchDescriptor::blocked_to_planar(arguments, &tile)?;
        Specialization::select(arguments, &tile, &dispatch)
    }
}

impl ReorderCore for BlockedToPlanarKernel {
    fn name(&self) -> &'static str {
        "reorder_blocked_to_planar"
    }

    fn supported_key(&self) -> &ParamsKey {
        supported_key()
    }

    fn validate(
        &self,
        arguments: &ReorderArguments,
    ) -> bool {
        if !base::validate(self.supported_key(), arguments) {
            return false;
        }

        let alignment = match fsv_alignment(arguments) {
            Ok(alignment) => alignment,
            Err(error) => {
                log::debug!("{}: {error}", self.name());
                return false;
            },
        };

        let feature = arguments.input.feature();
        match self.config.channel_alignment {
            ChannelAlignmentPolicy::Strict if feature % alignment != 0 => {
                log::debug!("{}: {feature} features are not a multiple of {alignment}", self.name());
                false
            },
            ChannelAlignmentPolicy::Strict | ChannelAlignmentPolicy::Permissive => true,
        }
    }

    fn set_default(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<DispatchDescriptor> {
        let tile = self.tile_configuration(arguments)?;
        DispatchDescriptor::blocked_to_planar(arguments, &tile)
    }

    fn jit_constants(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<JitConstants> {
        let mut jit = base::jit_constants(arguments)?;
        jit.merge(self.specialization(arguments)?.jit_constants());
        Ok(jit)
    }

    fn priority(
        &self,
        _arguments: &ReorderArguments,
    ) -> KernelPriority {
        KernelPriority::FORCE_PRIORITY_5
    }
}
