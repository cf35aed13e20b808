use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub is_public: Option<bool>,
}

/// Partial update body. `is_public` selects the authorization branch; it is
/// never written to the record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub filter: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_camel_case_flag() {
        let req: CreateExerciseRequest =
            serde_json::from_str(r#"{"name":"Squat","isPublic":false}"#).unwrap();
        assert_eq!(req.name, "Squat");
        assert_eq!(req.is_public, Some(false));
        assert!(req.description.is_none());
    }

    #[test]
    fn update_request_fields_are_all_optional() {
        let req: UpdateExerciseRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.is_public.is_none());

        let req: UpdateExerciseRequest =
            serde_json::from_str(r#"{"isPublic":true,"difficulty":"hard"}"#).unwrap();
        assert_eq!(req.is_public, Some(true));
        assert_eq!(req.difficulty.as_deref(), Some("hard"));
    }
}
