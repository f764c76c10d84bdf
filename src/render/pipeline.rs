use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::{
        evaluator::FrameOutput,
        fingerprint::{FrameFingerprint, fingerprint_frame},
    },
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{MotionError, MotionResult},
    },
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames with a fingerprint not seen earlier in the range.
    pub frames_distinct: u64,
}

/// Render a frame range (inclusive start, exclusive end) in timeline order.
///
/// Parallel and sequential modes produce identical output; frames are independent, so workers
/// share nothing but the composition.
#[tracing::instrument(skip(comp, threading), fields(comp = %comp.meta.id, start = range.start.0, end = range.end.0))]
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> MotionResult<(Vec<FrameOutput>, RenderStats)> {
    if range.is_empty() {
        return Err(MotionError::validation("render range must be non-empty"));
    }
    comp.validate()?;

    let len = range.len_frames();
    let mut out = Vec::with_capacity(len.min(4096) as usize);
    let mut seen = HashSet::<FrameFingerprint>::new();
    let mut stats = RenderStats::default();

    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            let frame = comp.render(FrameIndex(f));
            record(&mut stats, &mut seen, &frame);
            out.push(frame);
        }
        return Ok((out, stats));
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| MotionError::evaluation(format!("invalid chunk range: {e}")))?;
        let frames = render_chunk_parallel(comp, chunk, &pool);
        tracing::debug!(
            start = chunk.start.0,
            end = chunk.end.0,
            frames = frames.len(),
            "rendered chunk"
        );
        for frame in frames {
            record(&mut stats, &mut seen, &frame);
            out.push(frame);
        }
        chunk_start = chunk_end;
    }

    Ok((out, stats))
}

fn render_chunk_parallel(
    comp: &Composition,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> Vec<FrameOutput> {
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| comp.render(FrameIndex(f)))
            .collect::<Vec<_>>()
    })
}

fn record(stats: &mut RenderStats, seen: &mut HashSet<FrameFingerprint>, frame: &FrameOutput) {
    stats.frames_total += 1;
    if seen.insert(fingerprint_frame(frame)) {
        stats.frames_distinct += 1;
    }
}

fn build_thread_pool(threads: Option<usize>) -> MotionResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MotionError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MotionError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
