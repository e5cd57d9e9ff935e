use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use rss::Channel;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::archive::skills;

pub const OBJECT_PREFIX: &str = "upwork_skills_";
pub const OBJECT_EXTENSION: &str = ".json.gz";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRecord {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pubdate: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("the feed channel has no {field} element")]
    MissingField { field: String },
    #[error("failed to encode the content record: {msg}")]
    Encode { msg: String },
}

impl ContentRecord {
    pub fn from_channel(channel: &Channel) -> Result<Self, RecordError> {
        let pubdate = match channel.pub_date() {
            Some(pub_date) => pub_date.to_string(),
            None => {
                return Err(RecordError::MissingField {
                    field: "pubDate".to_string(),
                })
            }
        };

        Ok(ContentRecord {
            title: channel.title().to_string(),
            link: channel.link().to_string(),
            description: channel.description().to_string(),
            pubdate,
            skills: skills::extract(channel),
        })
    }

    pub fn to_compressed_json(&self) -> Result<Vec<u8>, RecordError> {
        let serialized = serde_json::to_vec(self)?;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&serialized)?;

        Ok(encoder.finish()?)
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(error: serde_json::Error) -> Self {
        let msg = format!("{:?}", error);

        RecordError::Encode { msg }
    }
}

impl From<std::io::Error> for RecordError {
    fn from(error: std::io::Error) -> Self {
        let msg = format!("{:?}", error);

        RecordError::Encode { msg }
    }
}

pub fn object_name(time: DateTime<Utc>) -> String {
    let timestamp = time.format(TIMESTAMP_FORMAT).to_string().replace(' ', "_");

    format!("{}{}{}", OBJECT_PREFIX, timestamp, OBJECT_EXTENSION)
}
