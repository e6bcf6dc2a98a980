use serde::{Deserialize, Serialize};

/// Response envelope used by every backend endpoint.
///
/// List endpoints additionally carry `page`/`pages` when the request was
/// paginated; mutation endpoints return the envelope with `data` omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub pages: Option<usize>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload, or the backend message on failure.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(if self.message.is_empty() {
                "Request failed".to_string()
            } else {
                self.message
            });
        }
        self.data.ok_or_else(|| "Empty response body".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_parses() {
        let json = r#"{"success":true,"message":"","data":[1,2,3],"page":2,"pages":5}"#;
        let env: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        assert_eq!(env.page, Some(2));
        assert_eq!(env.pages, Some(5));
        assert_eq!(env.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn mutation_envelope_has_no_pagination() {
        let json = r#"{"success":true,"message":"Blog deleted"}"#;
        let env: Envelope<()> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        assert_eq!(env.message, "Blog deleted");
        assert!(env.page.is_none());
    }

    #[test]
    fn failure_surfaces_backend_message() {
        let json = r#"{"success":false,"message":"Not allowed"}"#;
        let env: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Not allowed");
    }
}
