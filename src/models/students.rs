use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StudentSummary {
    pub id: String,
    pub roll_number: String,
    pub name: String,
    #[serde(default)]
    pub semester: u8,
}

/// Profile returned by `GET /all-Details/C-U` for the logged-in student
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StudentDetails {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roll_number: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub semester: u8,
    #[serde(default)]
    pub cgpa: Option<f32>,
    #[serde(default)]
    pub activity_points: u32,
}
