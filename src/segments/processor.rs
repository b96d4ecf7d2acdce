use anyhow::Result;

use crate::segments::SegmentsConfig;
use crate::segments::storage::SegmentRepository;
use crate::segments::operations::*;
use crate::segments::processor_enums::{SegmentsProcessorInput, SegmentsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<SegmentsConfig, SegmentsProcessorOutput> for SegmentsProcessorInput {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        _local_config: &mut SegmentsConfig,
    ) -> Result<SegmentsProcessorOutput> {
        let mut store = app_config.segments.lock().await;
        let repo: &mut (dyn SegmentRepository + Send) = &mut **store;

        match self {
            SegmentsProcessorInput::List => {
                let res = list_segments(repo)?;
                Ok(SegmentsProcessorOutput::List(res))
            }
            SegmentsProcessorInput::Get(segment_id) => {
                let res = get_segment(repo, segment_id)?;
                Ok(SegmentsProcessorOutput::Get(res))
            }
            SegmentsProcessorInput::Create(input) => {
                let res = create_segment(repo, input.clone())?;
                Ok(SegmentsProcessorOutput::Create(res))
            }
            SegmentsProcessorInput::Update(args) => {
                let res = update_segment(repo, &args.segment_id, args.segment.clone())?;
                Ok(SegmentsProcessorOutput::Update(res))
            }
            SegmentsProcessorInput::Delete(segment_id) => {
                delete_segment(repo, segment_id)?;
                Ok(SegmentsProcessorOutput::Delete)
            }
            SegmentsProcessorInput::Apply(segment_id) => {
                let res = apply_segment(repo, segment_id)?;
                Ok(SegmentsProcessorOutput::Apply(res))
            }
        }
    }
}
