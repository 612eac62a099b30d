//! Batch uploader: chunked metadata extraction with cooperative frame yields.
//!
//! [`BatchUpload`] is a synchronous state machine; [`run_batch_upload`] drives it and awaits the
//! host frame scheduler between chunks. Merging the finished batch into storage is left to the
//! caller so that it happens exactly once per batch.

use platform_host::{
    iso_timestamp_from_unix_ms, next_monotonic_timestamp_ms, random_id_suffix, unix_time_ms_now,
    FrameScheduler, UploadSource,
};

use crate::model::{FileKind, FileRecord};

const ID_SUFFIX_LEN: usize = 14;

/// Source of fresh record ids and upload timestamps.
pub trait RecordFactory {
    /// Returns a new unique record id.
    fn next_id(&self) -> String;
    /// Returns the current instant as an ISO-8601 UTC string.
    fn now_iso(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clock-backed [`RecordFactory`]: ids are monotonic unix milliseconds plus a random suffix.
pub struct HostRecordFactory;

impl RecordFactory for HostRecordFactory {
    fn next_id(&self) -> String {
        format!(
            "{}{}",
            next_monotonic_timestamp_ms(),
            random_id_suffix(ID_SUFFIX_LEN)
        )
    }

    fn now_iso(&self) -> String {
        iso_timestamp_from_unix_ms(unix_time_ms_now())
    }
}

/// Name shown for an uploaded file: the last segment of a non-empty relative path, else the raw
/// name.
pub fn display_name(name: &str, relative_path: Option<&str>) -> String {
    relative_path
        .filter(|path| !path.is_empty())
        .and_then(|path| path.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or(name)
        .to_string()
}

/// Extracts a [`FileRecord`] from one upload source.
///
/// # Errors
///
/// Returns the host message when the content handle cannot be created.
pub fn build_record(
    source: &dyn UploadSource,
    factory: &dyn RecordFactory,
) -> Result<FileRecord, String> {
    let raw_name = source.name();
    let relative_path = source.relative_path();
    let name = display_name(&raw_name, relative_path.as_deref());
    let kind = FileKind::classify(&source.mime_type(), &name);
    let content = source.create_content_handle()?;
    Ok(FileRecord {
        id: factory.next_id(),
        name,
        kind,
        size: source.size(),
        uploaded_at: factory.now_iso(),
        content,
        favorite: false,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle of one batch.
pub enum UploadPhase {
    /// Created, nothing processed.
    Idle,
    /// Working through chunk `chunk_index` (0-based).
    Processing {
        /// Chunk currently being processed.
        chunk_index: usize,
    },
    /// All files processed; waiting for the caller to merge.
    Finalizing,
    /// Outcome handed out.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Counters reported while a batch runs.
pub struct UploadProgress {
    /// Files attempted so far.
    pub processed: usize,
    /// Files that produced a record.
    pub succeeded: usize,
    /// Files that failed.
    pub failed: usize,
    /// Files in the batch.
    pub total: usize,
}

impl UploadProgress {
    /// Whole percent of files processed; an empty batch is complete.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.processed * 100) / self.total) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of one [`BatchUpload::step`].
pub enum UploadStep {
    /// A chunk finished and more remain; yield a frame before stepping again.
    Yield,
    /// Every file was processed; call [`BatchUpload::finish`].
    Finalize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Finished batch.
pub struct UploadOutcome {
    /// Records created, in selection order.
    pub uploaded: Vec<FileRecord>,
    /// Names of files that failed.
    pub failed_names: Vec<String>,
    /// Files in the batch.
    pub total: usize,
}

impl UploadOutcome {
    /// User-facing summary, e.g. `Uploaded 3 file(s), 1 failed`.
    pub fn summary(&self) -> String {
        let mut summary = format!("Uploaded {} file(s)", self.uploaded.len());
        if !self.failed_names.is_empty() {
            summary.push_str(&format!(", {} failed", self.failed_names.len()));
        }
        summary
    }
}

#[derive(Debug)]
/// Chunked upload state machine over a fixed list of sources.
pub struct BatchUpload<U> {
    sources: Vec<U>,
    chunk_size: usize,
    progress_every: usize,
    next_index: usize,
    phase: UploadPhase,
    uploaded: Vec<FileRecord>,
    failed_names: Vec<String>,
}

impl<U: UploadSource> BatchUpload<U> {
    /// Creates an idle batch. Zero sizes are treated as one.
    pub fn new(sources: Vec<U>, chunk_size: usize, progress_every: usize) -> Self {
        Self {
            sources,
            chunk_size: chunk_size.max(1),
            progress_every: progress_every.max(1),
            next_index: 0,
            phase: UploadPhase::Idle,
            uploaded: Vec::new(),
            failed_names: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// Files in the batch.
    pub fn total(&self) -> usize {
        self.sources.len()
    }

    /// Number of chunks the batch splits into.
    pub fn chunk_count(&self) -> usize {
        self.sources.len().div_ceil(self.chunk_size)
    }

    /// Counters so far.
    pub fn progress(&self) -> UploadProgress {
        UploadProgress {
            processed: self.next_index,
            succeeded: self.uploaded.len(),
            failed: self.failed_names.len(),
            total: self.sources.len(),
        }
    }

    /// Processes one chunk, reporting progress every `progress_every` files and at chunk end.
    pub fn step(
        &mut self,
        factory: &dyn RecordFactory,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> UploadStep {
        let chunk_index = match self.phase {
            UploadPhase::Idle => 0,
            UploadPhase::Processing { chunk_index } => chunk_index,
            UploadPhase::Finalizing | UploadPhase::Done => return UploadStep::Finalize,
        };
        if self.next_index >= self.sources.len() {
            self.phase = UploadPhase::Finalizing;
            return UploadStep::Finalize;
        }
        self.phase = UploadPhase::Processing { chunk_index };

        let end = (self.next_index + self.chunk_size).min(self.sources.len());
        let mut in_chunk = 0;
        while self.next_index < end {
            let source = &self.sources[self.next_index];
            match build_record(source, factory) {
                Ok(record) => self.uploaded.push(record),
                Err(err) => {
                    let name = source.name();
                    leptos::logging::warn!("upload of `{name}` failed: {err}");
                    self.failed_names.push(name);
                }
            }
            self.next_index += 1;
            in_chunk += 1;
            if in_chunk % self.progress_every == 0 && self.next_index < end {
                on_progress(self.progress());
            }
        }
        on_progress(self.progress());

        if self.next_index >= self.sources.len() {
            self.phase = UploadPhase::Finalizing;
            UploadStep::Finalize
        } else {
            self.phase = UploadPhase::Processing {
                chunk_index: chunk_index + 1,
            };
            UploadStep::Yield
        }
    }

    /// Hands out the outcome and moves to [`UploadPhase::Done`].
    pub fn finish(&mut self) -> UploadOutcome {
        self.phase = UploadPhase::Done;
        UploadOutcome {
            uploaded: std::mem::take(&mut self.uploaded),
            failed_names: std::mem::take(&mut self.failed_names),
            total: self.sources.len(),
        }
    }
}

/// Drives `upload` to completion, awaiting one frame between consecutive chunks.
pub async fn run_batch_upload<U: UploadSource>(
    upload: &mut BatchUpload<U>,
    frames: &dyn FrameScheduler,
    factory: &dyn RecordFactory,
    mut on_progress: impl FnMut(UploadProgress),
) -> UploadOutcome {
    while upload.step(factory, &mut on_progress) == UploadStep::Yield {
        frames.next_frame().await;
    }
    let outcome = upload.finish();
    leptos::logging::log!(
        "upload batch finished: {} of {} succeeded",
        outcome.uploaded.len(),
        outcome.total
    );
    outcome
}
