use serde::Deserialize;

/// Top-level envelope of every Stack Exchange API response. The item type
/// depends on which endpoint was called.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub quota_max: i64,
    #[serde(default)]
    pub quota_remaining: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question_id: u64,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub answer_count: u64,
    #[serde(default)]
    pub creation_date: i64,
    #[serde(default)]
    pub last_activity_date: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Answer {
    pub answer_id: u64,
    pub question_id: u64,
    pub body: String,
    pub score: i64,
    pub is_accepted: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub creation_date: i64,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Owner {
    pub display_name: Option<String>,
    pub reputation: Option<i64>,
    pub user_id: Option<i64>,
    pub user_type: Option<String>,
    pub accept_rate: Option<i64>,
    pub profile_image: Option<String>,
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTIONS: &str = r#"{
        "items": [
            {
                "tags": ["typescript", "generics"],
                "owner": { "reputation": 12, "user_id": 7, "user_type": "registered", "display_name": "ann" },
                "is_answered": true,
                "view_count": 40,
                "answer_count": 2,
                "score": 3,
                "last_activity_date": 1580000000,
                "creation_date": 1570000000,
                "question_id": 100,
                "link": "https://stackoverflow.com/questions/100/a",
                "title": "A"
            }
        ],
        "has_more": true,
        "quota_max": 300,
        "quota_remaining": 299
    }"#;

    #[test]
    fn decodes_question_envelope() {
        let response: SearchResponse<Question> = serde_json::from_str(QUESTIONS).unwrap();
        assert!(response.has_more);
        assert_eq!(response.quota_remaining, 299);
        let question = &response.items[0];
        assert_eq!(question.question_id, 100);
        assert_eq!(question.tags, vec!["typescript", "generics"]);
        assert_eq!(question.owner.as_ref().and_then(|o| o.display_name.as_deref()), Some("ann"));
    }

    #[test]
    fn informational_fields_are_optional() {
        let json = r#"{ "items": [ { "question_id": 1, "title": "t", "link": "l" } ] }"#;
        let response: SearchResponse<Question> = serde_json::from_str(json).unwrap();
        assert!(!response.has_more);
        assert_eq!(response.items[0].owner, None);
    }

    #[test]
    fn missing_items_is_rejected() {
        let result = serde_json::from_str::<SearchResponse<Question>>(r#"{ "has_more": false }"#);
        assert!(result.is_err());
    }

    #[test]
    fn answer_without_body_is_rejected() {
        let json = r#"{ "items": [ { "answer_id": 1, "question_id": 2, "score": 0, "is_accepted": false } ] }"#;
        assert!(serde_json::from_str::<SearchResponse<Answer>>(json).is_err());
    }
}
