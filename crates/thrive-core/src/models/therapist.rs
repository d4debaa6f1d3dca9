use serde::{Deserialize, Serialize};

/// Full therapist profile as returned by the directory endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Therapist {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// The slice of a therapist profile cached in the session store and used to
/// scope downstream requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapistRef {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub avatar_url: Option<String>,
}

impl TherapistRef {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Therapist> for TherapistRef {
    fn from(t: Therapist) -> Self {
        Self {
            id: t.id,
            first_name: t.first_name,
            last_name: t.last_name,
            title: t.title,
            avatar_url: t.avatar_url,
        }
    }
}
