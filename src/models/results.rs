use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SubjectResult {
    pub subject_code: String,
    pub subject_name: String,
    pub grade: String,
    #[serde(default)]
    pub credits: u8,
    #[serde(default)]
    pub marks: Option<u16>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SemesterResults {
    pub semester: u8,
    #[serde(default)]
    pub sgpa: Option<f32>,
    #[serde(default)]
    pub subjects: Vec<SubjectResult>,
}

/// Binary download with the filename resolved from its headers
#[derive(Clone, PartialEq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for DownloadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}
