use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub rss_url: String,
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub aws_region: String,
    pub aws_s3_bucket: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            rss_url: read_var("RSS_URL"),
            aws_access_key: read_var("AWS_ACCESS_KEY"),
            aws_secret_key: read_var("AWS_SECRET_KEY"),
            aws_region: read_var("AWS_REGION"),
            aws_s3_bucket: read_var("AWS_S3_BUCKET"),
        }
    }
}

fn read_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("No {} environment variable found", name))
}
