use rss::Channel;
use thiserror::Error;
use urlencoding::decode_binary;

pub const SKILLS_MARKER: &str = "Skills</b>:";
pub const LINE_BREAK: &str = "<br />";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillsError {
    #[error("no skills section in the encoded content")]
    MarkerNotFound,
}

pub fn extract(channel: &Channel) -> Vec<String> {
    let mut skills = Vec::new();

    for item in channel.items() {
        let content = match item.content() {
            Some(content) => content,
            None => {
                log::error!("Skipping an item without encoded content: {:?}", item.link());

                continue;
            }
        };

        match item_skills(content) {
            Ok(parsed) => skills.extend(parsed),
            Err(error) => log::error!("{}: {}", error, content),
        }
    }

    skills
}

pub fn item_skills(content: &str) -> Result<Vec<String>, SkillsError> {
    let after_marker = match content.split_once(SKILLS_MARKER) {
        Some((_, after_marker)) => after_marker,
        None => return Err(SkillsError::MarkerNotFound),
    };

    // Only the first skills section counts; everything after the first
    // line break belongs to the rest of the posting.
    let segment = match after_marker.split_once(LINE_BREAK) {
        Some((segment, _)) => segment,
        None => after_marker,
    };

    Ok(segment.split(',').map(decode_skill).collect())
}

fn decode_skill(token: &str) -> String {
    let decoded = decode_binary(token.as_bytes());

    String::from_utf8_lossy(&decoded).trim().to_string()
}
