use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub model: String,
}

/// Raw image bytes with their detected MIME type.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

impl ImageInput {
    pub fn base64(&self) -> String {
        data_encoding::BASE64.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encoding() {
        let image = ImageInput { mime_type: "image/png", data: b"hi!".to_vec() };
        assert_eq!(image.base64(), "aGkh");
    }
}
