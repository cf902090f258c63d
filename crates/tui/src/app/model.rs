//! In-memory channels and messages.

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub flagged: bool,
    /// Id of the message this one replies to.
    pub reply_to: Option<u64>,
}

impl Message {
    /// URLs mentioned in the message text, in order of appearance.
    pub fn urls(&self) -> Vec<String> {
        extract_urls(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub messages: Vec<Message>,
    pub unread: usize,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
            unread: 0,
        }
    }

    pub fn message(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn message_mut(&mut self, id: u64) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}

/// Find `http://` and `https://` URLs in `text`, trimming trailing punctuation.
pub fn extract_urls(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let start = word.find("https://").or_else(|| word.find("http://"))?;
            let url = word[start..].trim_end_matches(|c: char| {
                matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '>' | '"' | '\'')
            });
            let scheme_len = if url.starts_with("https://") { 8 } else { 7 };
            (url.len() > scheme_len).then(|| url.to_string())
        })
        .collect()
}
