pub mod archive_job;
pub mod reader;
pub mod record;
pub mod skills;

pub use archive_job::{ArchiveJob, ArchiveJobError, ArchiveOutcome};
pub use reader::{FeedReaderError, ReadFeed, RssReader};
pub use record::ContentRecord;
