use serde::Serialize;

/// Uniform response envelope: every endpoint answers `{success, data?,
/// count?, message?}`, with `success:false` plus a human-readable message
/// as the only error shape.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: None,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let value = serde_json::to_value(ApiResponse::ok("record")).expect("serialize");
        assert_eq!(value, json!({ "success": true, "data": "record" }));
    }

    #[test]
    fn error_envelope_carries_only_the_message() {
        let value = serde_json::to_value(ApiResponse::error("Visitor not found")).expect("serialize");
        assert_eq!(
            value,
            json!({ "success": false, "message": "Visitor not found" })
        );
    }

    #[test]
    fn list_envelope_reports_count() {
        let value = serde_json::to_value(ApiResponse::list(vec![1, 2, 3])).expect("serialize");
        assert_eq!(
            value,
            json!({ "success": true, "count": 3, "data": [1, 2, 3] })
        );
    }
}
