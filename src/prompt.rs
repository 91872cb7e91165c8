/// Control marker interpreted by the model runtime, opaque to this service.
pub const CONTROL_MARKER: &str = "/no_think";

pub fn build_prompt(query: &str) -> String {
    format!("{CONTROL_MARKER} Summarise this : {query} {CONTROL_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, CONTROL_MARKER};

    #[test]
    fn prompt_surrounds_query_with_markers() {
        let prompt = build_prompt("The sky is blue.");
        assert_eq!(
            prompt,
            "/no_think Summarise this : The sky is blue. /no_think"
        );
    }

    #[test]
    fn prompt_contains_query_as_contiguous_substring() {
        let query = "a multi word\nquery with \"quotes\"";
        let prompt = build_prompt(query);
        assert!(prompt.contains(query));
        assert!(prompt.starts_with(CONTROL_MARKER));
        assert!(prompt.ends_with(CONTROL_MARKER));
    }

    #[test]
    fn empty_query_still_builds_template() {
        assert_eq!(build_prompt(""), "/no_think Summarise this :  /no_think");
    }
}
