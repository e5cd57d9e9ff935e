use std::str::FromStr;

use el_archivador::archive::{ArchiveJob, ArchiveJobError, ContentRecord};
use el_archivador::config::Config;
use flate2::read::GzDecoder;
use rss::Channel;

#[test]
fn it_produces_the_archive_record_for_a_feed() {
    let xml_feed = "<rss version=\"2.0\" xmlns:content=\"http://purl.org/rss/1.0/modules/content/\">\
        <channel>\
        <title>Jobs</title>\
        <link>http://x</link>\
        <description>d</description>\
        <pubDate>Mon</pubDate>\
        <item><content:encoded><![CDATA[job description<br /><b>Skills</b>: Go, Rust<br />more]]></content:encoded></item>\
        <item><content:encoded><![CDATA[a posting without a skills section]]></content:encoded></item>\
        </channel>\
        </rss>";
    let channel = Channel::from_str(xml_feed).unwrap();

    let record = ContentRecord::from_channel(&channel).unwrap();

    let expected_json = "{\"title\":\"Jobs\",\"link\":\"http://x\",\"description\":\"d\",\"pubdate\":\"Mon\",\"skills\":[\"Go\",\"Rust\"]}";
    assert_eq!(expected_json, serde_json::to_string(&record).unwrap());

    let compressed = record.to_compressed_json().unwrap();
    let decoded: ContentRecord = serde_json::from_reader(GzDecoder::new(&compressed[..])).unwrap();

    assert_eq!(record, decoded);
}

#[test]
fn it_aborts_the_run_when_the_fetch_fails() {
    let config = Config {
        rss_url: "http://127.0.0.1:0/jobs/rss".to_string(),
        aws_access_key: "key".to_string(),
        aws_secret_key: "secret".to_string(),
        aws_region: "us-east-1".to_string(),
        aws_s3_bucket: "bucket".to_string(),
    };

    match ArchiveJob::new(config).execute() {
        Err(ArchiveJobError::FetchError { .. }) => (),
        other => panic!("expected a fetch error, got {:?}", other),
    }
}
