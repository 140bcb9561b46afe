use serde::{Deserialize, Serialize};

/// Body of `POST /validacion/validarMail`, used for the first code request and
/// for every resend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCodeRequest {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "ruc")]
    pub document: String,
}

/// Body of `POST /validacion/cambiarContrasena`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "ruc")]
    pub document: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nuevaContrasena")]
    pub new_password: String,
}

/// Success and error payloads of the validation API share this shape; `msg`
/// is optional and callers supply their own fallback text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl MessageResponse {
    pub fn message_or(&self, fallback: &str) -> String {
        self.msg
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "apellidos", default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "rol_id", default)]
    pub role_id: Option<i64>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const SERVER: &'static str = "SERVER_ERROR";

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::UNKNOWN.to_string(),
            status: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::REQUEST_FAILED.to_string(),
            status: None,
        }
    }

    /// Non-2xx response. `error` holds the server's `msg`, possibly empty.
    pub fn server(status: u16, payload: MessageResponse) -> Self {
        Self {
            error: payload.msg.unwrap_or_default(),
            code: Self::SERVER.to_string(),
            status: Some(status),
        }
    }

    /// The server-supplied `msg`, when there is one. Transport and parse
    /// failures yield `None`.
    pub fn user_message(&self) -> Option<&str> {
        let msg = self.error.trim();
        (self.code == Self::SERVER && !msg.is_empty()).then_some(msg)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.user_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_verification_code_request_uses_backend_field_names() {
        let req = VerificationCodeRequest {
            email: "a@b.com".into(),
            document: "123".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, serde_json::json!({ "correo": "a@b.com", "ruc": "123" }));
    }

    #[wasm_bindgen_test]
    fn serialize_change_password_request_uses_backend_field_names() {
        let req = ChangePasswordRequest {
            email: "a@b.com".into(),
            document: "123".into(),
            code: "000000".into(),
            new_password: "x".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["correo"], serde_json::json!("a@b.com"));
        assert_eq!(v["ruc"], serde_json::json!("123"));
        assert_eq!(v["codigo"], serde_json::json!("000000"));
        assert_eq!(v["nuevaContrasena"], serde_json::json!("x"));
    }

    #[wasm_bindgen_test]
    fn deserialize_session_user_with_and_without_role() {
        let raw = r#"{"nombre":"Ana","apellidos":"Pérez","email":"ana@condado.ec","rol_id":2}"#;
        let user: SessionUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.display_name(), "Ana Pérez");
        assert_eq!(user.role_id, Some(2));

        let raw = r#"{"nombre":"Luis","apellidos":"","email":"luis@condado.ec","rol_id":null}"#;
        let user: SessionUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.display_name(), "Luis");
        assert!(user.role_id.is_none());
    }

    #[wasm_bindgen_test]
    fn message_response_falls_back_when_msg_missing_or_blank() {
        let empty = MessageResponse::default();
        assert_eq!(empty.message_or("Código reenviado"), "Código reenviado");

        let blank = MessageResponse {
            msg: Some("  ".into()),
        };
        assert_eq!(blank.message_or("Código reenviado"), "Código reenviado");

        let sent: MessageResponse = serde_json::from_str(r#"{"msg":"Código enviado"}"#).unwrap();
        assert_eq!(sent.message_or("Correo enviado correctamente"), "Código enviado");
    }
}
