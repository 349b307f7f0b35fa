use serde::Deserialize;

/// Body of a successful `POST /login` response.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_deserializes() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"tok123","token_type":"bearer"}"#).unwrap();
        assert_eq!(response.access_token, "tok123");
    }
}
