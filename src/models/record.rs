/// One input row: an identifier and its free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub raw_text: String,
}

impl Record {
    pub fn new(id: i64, raw_text: impl Into<String>) -> Self {
        Self {
            id,
            raw_text: raw_text.into(),
        }
    }
}
