pub const STACK_API_SIMPLE_SEARCH: &str =
    "https://api.stackexchange.com/2.2/search?site=stackoverflow";
pub const STACK_API_ADVANCED_SEARCH: &str =
    "https://api.stackexchange.com/2.2/search/advanced?site=stackoverflow";
pub const STACK_API_QUESTION_ANSWERS: &str =
    "https://api.stackexchange.com/2.2/questions/{id}/answers?site=stackoverflow&filter=!b1MMEcD.mX(B2q";

pub const TITLE: &str = "&title=";
pub const INTITLE: &str = "&intitle=";
pub const FROM_DATE: &str = "&fromdate=";
pub const TO_DATE: &str = "&todate=";

/// URL templates the search client builds requests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub simple_search: String,
    pub advanced_search: String,
    /// Must contain an `{id}` placeholder (matched case-insensitively).
    pub answers: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            simple_search: STACK_API_SIMPLE_SEARCH.to_string(),
            advanced_search: STACK_API_ADVANCED_SEARCH.to_string(),
            answers: STACK_API_QUESTION_ANSWERS.to_string(),
        }
    }
}

/// Optional creation-date bounds for question searches, in unix seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub from_date: Option<i64>,
    pub to_date: Option<i64>,
}

impl SearchFilters {
    pub fn query_fragment(&self) -> String {
        let mut fragment = String::new();
        if let Some(from) = self.from_date {
            fragment.push_str(FROM_DATE);
            fragment.push_str(&from.to_string());
        }
        if let Some(to) = self.to_date {
            fragment.push_str(TO_DATE);
            fragment.push_str(&to.to_string());
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_add_nothing() {
        assert_eq!(SearchFilters::default().query_fragment(), "");
    }

    #[test]
    fn filters_render_both_bounds_in_order() {
        let filters = SearchFilters { from_date: Some(10), to_date: Some(20) };
        assert_eq!(filters.query_fragment(), "&fromdate=10&todate=20");
    }

    #[test]
    fn answers_template_carries_placeholder_and_filter() {
        let endpoints = Endpoints::default();
        assert!(endpoints.answers.contains("{id}"));
        assert!(endpoints.answers.ends_with("filter=!b1MMEcD.mX(B2q"));
    }
}
