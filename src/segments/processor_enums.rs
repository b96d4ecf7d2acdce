use serde::{Deserialize, Serialize};

use crate::aggregators::filters::FilterSet;
use crate::segments::db_types::{Segment, SegmentInputArgs};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateSegmentInputArgs {
    pub segment_id: String,
    pub segment: SegmentInputArgs,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum SegmentsProcessorInput {
    List,
    Get(String),
    Create(SegmentInputArgs),
    Update(UpdateSegmentInputArgs),
    Delete(String),
    Apply(String),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum SegmentsProcessorOutput {
    List(Vec<Segment>),
    Get(Segment),
    Create(Segment),
    Update(Segment),
    Delete,
    Apply(FilterSet),
}
