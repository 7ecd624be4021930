use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PanelError;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Maps a response body onto the panel outcome.
///
/// Application failures are told apart from transport failures by looking at
/// the payload, never the status code: any JSON object whose `success` is not
/// `true` is an application failure carrying its `error` text.
pub fn parse_outcome<T: DeserializeOwned>(body: &str) -> Result<T, PanelError> {
    let value: Value = serde_json::from_str(body).map_err(|err| {
        log::error!("Response is not JSON: {err}");
        PanelError::transport(format!("unparseable response: {err}"))
    })?;

    if value.get("success").and_then(Value::as_bool) == Some(true) {
        return serde_json::from_value(value).map_err(|err| {
            log::error!("Response does not match the expected shape: {err}");
            PanelError::transport(format!("unexpected response shape: {err}"))
        });
    }

    let message = value
        .get("error")
        .map(|error| match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    log::warn!("Server reported failure: {message}");
    Err(PanelError::Application(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::YieldPrediction;

    #[test]
    fn success_body_deserializes_payload() {
        let body = r#"{"success":true,"predicted_yield":12.345,"unit":"tons/acre","recommendations":["Irrigate more"]}"#;
        let prediction: YieldPrediction = parse_outcome(body).expect("success");
        assert_eq!(prediction.unit, "tons/acre");
        assert_eq!(prediction.recommendations, vec!["Irrigate more"]);
    }

    #[test]
    fn success_false_is_an_application_failure() {
        let body = r#"{"success":false,"error":"bad input"}"#;
        let err = parse_outcome::<YieldPrediction>(body).unwrap_err();
        assert_eq!(err, PanelError::Application("bad input".to_string()));
    }

    #[test]
    fn missing_error_text_falls_back() {
        let err = parse_outcome::<YieldPrediction>(r#"{"success":false}"#).unwrap_err();
        assert_eq!(err, PanelError::Application(UNKNOWN_ERROR.to_string()));
    }

    #[test]
    fn non_json_body_is_a_transport_failure() {
        let err = parse_outcome::<YieldPrediction>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PanelError::Transport { .. }));
    }

    #[test]
    fn wrong_shape_on_success_is_a_transport_failure() {
        let err = parse_outcome::<YieldPrediction>(r#"{"success":true,"unit":"t"}"#).unwrap_err();
        assert!(matches!(err, PanelError::Transport { .. }));
    }
}
