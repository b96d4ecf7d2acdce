use uuid::Uuid;

use crate::aggregators::filters::FilterSet;
use crate::segments::SegmentError;
use crate::segments::db_types::{Segment, SegmentInputArgs};
use crate::segments::storage::SegmentRepository;

fn validated_name(name: &str) -> Result<String, SegmentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SegmentError::Validation(
            "Segment name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn list_segments<R: SegmentRepository + ?Sized>(repo: &R) -> Result<Vec<Segment>, SegmentError> {
    repo.load()
}

pub fn get_segment<R: SegmentRepository + ?Sized>(
    repo: &R,
    segment_id: &str,
) -> Result<Segment, SegmentError> {
    repo.load()?
        .into_iter()
        .find(|s| s.id == segment_id)
        .ok_or_else(|| SegmentError::NotFound(segment_id.to_string()))
}

/// Append a new segment with a fresh id
pub fn create_segment<R: SegmentRepository + ?Sized>(
    repo: &mut R,
    input: SegmentInputArgs,
) -> Result<Segment, SegmentError> {
    let name = validated_name(&input.name)?;
    let mut segments = repo.load()?;

    let segment = Segment {
        id: Uuid::new_v4().to_string(),
        name,
        filters: input.filters,
    };

    segments.push(segment.clone());
    repo.save(&segments)?;

    tracing::info!("Created segment {} ({})", segment.name, segment.id);
    Ok(segment)
}

/// Replace name and filters of an existing segment, keeping its id and position
pub fn update_segment<R: SegmentRepository + ?Sized>(
    repo: &mut R,
    segment_id: &str,
    input: SegmentInputArgs,
) -> Result<Segment, SegmentError> {
    let name = validated_name(&input.name)?;
    let mut segments = repo.load()?;

    let existing = segments
        .iter_mut()
        .find(|s| s.id == segment_id)
        .ok_or_else(|| SegmentError::NotFound(segment_id.to_string()))?;

    existing.name = name;
    existing.filters = input.filters;
    let updated = existing.clone();

    repo.save(&segments)?;

    tracing::info!("Updated segment {}", segment_id);
    Ok(updated)
}

pub fn delete_segment<R: SegmentRepository + ?Sized>(
    repo: &mut R,
    segment_id: &str,
) -> Result<(), SegmentError> {
    let mut segments = repo.load()?;
    let before = segments.len();
    segments.retain(|s| s.id != segment_id);

    if segments.len() == before {
        return Err(SegmentError::NotFound(segment_id.to_string()));
    }

    repo.save(&segments)?;

    tracing::info!("Deleted segment {}", segment_id);
    Ok(())
}

/// The pipeline filters a segment stands for
pub fn apply_segment<R: SegmentRepository + ?Sized>(
    repo: &R,
    segment_id: &str,
) -> Result<FilterSet, SegmentError> {
    let segment = get_segment(repo, segment_id)?;
    Ok(segment.filters.to_filter_set())
}
