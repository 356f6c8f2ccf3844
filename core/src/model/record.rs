#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    // header is line 1
    pub line: u64,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn is_complete(&self, width: usize) -> bool {
        self.fields.len() >= width
            && self.fields[..width].iter().all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub line: u64,
    pub fields: Vec<String>,
    pub reason: String,
}

impl RejectedRecord {
    pub fn incomplete(record: &Record, width: usize) -> Self {
        Self {
            line: record.line,
            fields: record.fields.clone(),
            reason: format!("expected {} non-empty fields", width),
        }
    }
}
