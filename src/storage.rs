use s3::creds::Credentials;
use s3::{Bucket, Region};

use crate::config::Config;

#[derive(Debug)]
pub struct StorageError {
    pub msg: String,
}

pub fn upload_object(
    config: &Config,
    object_name: &str,
    content: &[u8],
) -> Result<(), StorageError> {
    let bucket = build_bucket(config)?;

    match bucket.put_object_blocking(object_name, content) {
        Ok(_) => Ok(()),
        Err(error) => {
            let msg = format!("{:?}", error);

            Err(StorageError { msg })
        }
    }
}

fn build_bucket(config: &Config) -> Result<Bucket, StorageError> {
    let region: Region = match config.aws_region.parse() {
        Ok(region) => region,
        Err(error) => {
            let msg = format!("{:?}", error);

            return Err(StorageError { msg });
        }
    };

    let credentials = match Credentials::new(
        Some(config.aws_access_key.as_str()),
        Some(config.aws_secret_key.as_str()),
        None,
        None,
        None,
    ) {
        Ok(credentials) => credentials,
        Err(error) => {
            let msg = format!("{:?}", error);

            return Err(StorageError { msg });
        }
    };

    match Bucket::new(&config.aws_s3_bucket, region, credentials) {
        Ok(bucket) => Ok(bucket),
        Err(error) => {
            let msg = format!("{:?}", error);

            Err(StorageError { msg })
        }
    }
}
