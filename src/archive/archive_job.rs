use chrono::Utc;
use thiserror::Error;

use crate::archive::reader::{FeedReaderError, ReadFeed, RssReader};
use crate::archive::record::{self, ContentRecord, RecordError};
use crate::config::Config;
use crate::storage;

#[derive(Debug)]
pub struct ArchiveJob {
    config: Config,
}

#[derive(Debug)]
pub struct ArchiveOutcome {
    pub object_name: String,
    pub uploaded: bool,
}

#[derive(Debug, Error)]
pub enum ArchiveJobError {
    #[error("failed to fetch the feed: {msg}")]
    FetchError { msg: String },
    #[error("the feed channel has no {field} element")]
    MissingFieldError { field: String },
    #[error("failed to encode the content record: {msg}")]
    EncodeError { msg: String },
}

impl From<FeedReaderError> for ArchiveJobError {
    fn from(error: FeedReaderError) -> Self {
        ArchiveJobError::FetchError { msg: error.msg }
    }
}

impl From<RecordError> for ArchiveJobError {
    fn from(error: RecordError) -> Self {
        match error {
            RecordError::MissingField { field } => ArchiveJobError::MissingFieldError { field },
            RecordError::Encode { msg } => ArchiveJobError::EncodeError { msg },
        }
    }
}

impl ArchiveJob {
    pub fn new(config: Config) -> Self {
        ArchiveJob { config }
    }

    pub fn execute(&self) -> Result<ArchiveOutcome, ArchiveJobError> {
        log::info!("Started archiving the feed at {}", self.config.rss_url);

        let reader = RssReader {
            url: self.config.rss_url.clone(),
        };

        let channel = match reader.read() {
            Ok(channel) => channel,
            Err(error) => {
                log::error!("Failed to fetch the feed: {}", error.msg);

                return Err(ArchiveJobError::from(error));
            }
        };

        let content_record = match ContentRecord::from_channel(&channel) {
            Ok(content_record) => content_record,
            Err(error) => {
                log::error!("Failed to assemble the content record: {}", error);

                return Err(ArchiveJobError::from(error));
            }
        };

        let compressed = match content_record.to_compressed_json() {
            Ok(compressed) => compressed,
            Err(error) => {
                log::error!("Failed to encode the content record: {}", error);

                return Err(ArchiveJobError::from(error));
            }
        };

        let object_name = record::object_name(Utc::now());

        // A failed upload does not fail the run; it is reported through
        // the outcome so callers can still tell the difference.
        let uploaded = match storage::upload_object(&self.config, &object_name, &compressed) {
            Ok(()) => {
                log::info!("Skills upload successful");

                true
            }
            Err(error) => {
                log::error!("Failed to upload {}: {}", object_name, error.msg);

                false
            }
        };

        Ok(ArchiveOutcome {
            object_name,
            uploaded,
        })
    }
}
