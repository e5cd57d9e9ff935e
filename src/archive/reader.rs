use rss::Channel;

#[derive(Debug)]
pub struct FeedReaderError {
    pub msg: String,
}

pub trait ReadFeed {
    fn read(&self) -> Result<Channel, FeedReaderError>;
}

pub struct RssReader {
    pub url: String,
}

impl ReadFeed for RssReader {
    fn read(&self) -> Result<Channel, FeedReaderError> {
        let body = read_url(&self.url)?;

        match Channel::read_from(body.as_bytes()) {
            Ok(channel) => Ok(channel),
            Err(err) => {
                let msg = format!("{}", err);

                Err(FeedReaderError { msg })
            }
        }
    }
}

pub fn read_url(url: &str) -> Result<String, FeedReaderError> {
    match reqwest::blocking::get(url) {
        Ok(response) => {
            // The feed endpoint is expected to answer 200 exactly.
            if response.status() != reqwest::StatusCode::OK {
                let msg = format!("unexpected response status {}", response.status());

                return Err(FeedReaderError { msg });
            }

            match response.text() {
                Ok(body) => Ok(body),
                Err(error) => {
                    let msg = format!("{:?}", error);

                    Err(FeedReaderError { msg })
                }
            }
        }
        Err(error) => {
            let msg = format!("{:?}", error);

            Err(FeedReaderError { msg })
        }
    }
}
