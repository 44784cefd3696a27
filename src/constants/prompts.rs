pub const FACT_GENERATION_SYSTEM_PROMPT: &str = "You write short trivia statements for a \"spot the lie\" game. \
You only use information from the article you are given. \
You reply with the requested output format and nothing else: no prose, no markdown, no numbering.";

/// Output format the fact parser expects back from the model.
pub const FACT_OUTPUT_FORMAT: &str =
    "(fake_sentence @ False) | (fact_1 @ True) | (fact_2 @ True) | (fact_3 @ True)";

pub fn fact_generation_prompt(article: &str, level: &str) -> String {
    format!(
        "# Article Content:\n{article}\n\n\
         # Difficulty: {level}\n\n\
         Generate 4 statements based on the text:\n\
         - 1 fake statement (False)\n\
         - 3 true statements (True)\n\n\
         # Rules\n\
         - Sentences must not exceed 25 words.\n\
         - The fake statement must be first.\n\
         - Use the difficulty level to control subtlety.\n\
         - Do not use the characters '|' or '@' inside a sentence.\n\n\
         # Output Format (Strictly Adhere to this):\n\
         {FACT_OUTPUT_FORMAT}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fact_parser::parse_facts;

    #[test]
    fn prompt_embeds_article_and_level() {
        let prompt = fact_generation_prompt("Paris is the capital of France.", "hard");

        assert!(prompt.contains("Paris is the capital of France."));
        assert!(prompt.contains("# Difficulty: hard"));
        assert!(prompt.ends_with(FACT_OUTPUT_FORMAT));
    }

    #[test]
    fn output_format_example_is_parseable() {
        let facts = parse_facts(FACT_OUTPUT_FORMAT);

        assert_eq!(facts.len(), 4);
        assert!(!facts[0].is_true);
        assert!(facts[1..].iter().all(|f| f.is_true));
    }
}
