use crate::llm::LLMResponse;
use crate::models::TokenUsage;

/// Sum the usage of every response. Missing counts add nothing.
pub fn compute_usage<'a>(responses: impl IntoIterator<Item = &'a LLMResponse>) -> TokenUsage {
    responses.into_iter().fold(TokenUsage::default(), |acc, r| TokenUsage {
        input_tokens: acc.input_tokens + r.input_tokens.unwrap_or(0),
        output_tokens: acc.output_tokens + r.output_tokens.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(input: Option<u64>, output: Option<u64>) -> LLMResponse {
        LLMResponse {
            content: String::new(),
            input_tokens: input,
            output_tokens: output,
            model: "m".into(),
        }
    }

    #[test]
    fn test_usage_sums_known_counts() {
        let a = response(Some(1200), Some(300));
        let b = response(Some(400), None);
        assert_eq!(
            compute_usage([&a, &b]),
            TokenUsage { input_tokens: 1600, output_tokens: 300 }
        );
    }

    #[test]
    fn test_usage_of_nothing_is_zero() {
        assert_eq!(compute_usage(std::iter::empty()), TokenUsage::default());
    }
}
