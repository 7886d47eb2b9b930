//! Prompt mutation payload parsing and validation.
//!
//! Create and update accept either a JSON body or a `multipart/form-data`
//! submission (same field names, plus `images` file parts). Both shapes are
//! normalized into one `serde_json::Value` object so a single validator
//! produces the field-keyed error map.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use promptdeck_core::images::UploadedImage;
use serde_json::Value;

use crate::error::{AppError, AppResult, FieldErrors};

/// A parsed prompt mutation request: normalized field object plus any
/// uploaded image files.
#[derive(Debug, Default)]
pub struct PromptSubmission {
    pub body: Value,
    pub images: Vec<UploadedImage>,
}

/// Validated prompt fields, ready for persistence.
#[derive(Debug, Clone)]
pub struct PromptFields {
    pub title: String,
    pub content: String,
    pub domain_name: String,
    pub subtopic_name: String,
    pub is_template: bool,
    pub configurable_options: Option<Value>,
}

/// Extract a [`PromptSubmission`] from an incoming request.
///
/// Multipart requests are parsed field by field; anything else is read as
/// JSON, with a missing or malformed body treated as an empty object so the
/// validator reports per-field errors instead of a parse failure.
pub async fn extract_prompt_submission(req: Request) -> AppResult<PromptSubmission> {
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        parse_multipart(multipart).await
    } else {
        let body = match Json::<Value>::from_request(req, &()).await {
            Ok(Json(value)) => value,
            Err(_) => Value::Object(serde_json::Map::new()),
        };
        Ok(PromptSubmission {
            body,
            images: Vec::new(),
        })
    }
}

async fn parse_multipart(mut multipart: Multipart) -> AppResult<PromptSubmission> {
    let mut fields = serde_json::Map::new();
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "images" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                images.push(UploadedImage {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "title" | "content" | "domain_name" | "subtopic_name" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                fields.insert(name, Value::String(text));
            }
            "is_template" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                fields.insert(name, coerce_form_bool(&text));
            }
            "configurable_options" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // Parsed JSON passes through; anything unparseable is kept as
                // a string so validation rejects it as a non-object.
                let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
                fields.insert(name, value);
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(PromptSubmission {
        body: Value::Object(fields),
        images,
    })
}

/// Form text values for `is_template`; unrecognized input is left as a string
/// so the validator flags it.
fn coerce_form_bool(text: &str) -> Value {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Value::Bool(true),
        "false" | "0" | "" => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}

fn trimmed_str_field(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Validate a normalized prompt field object.
///
/// Returns the full field-keyed error map on failure; validation is terminal
/// and nothing is persisted.
pub fn validate_prompt_payload(body: &Value) -> Result<PromptFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = trimmed_str_field(body, "title");
    let content = trimmed_str_field(body, "content");
    let domain_name = trimmed_str_field(body, "domain_name");
    let subtopic_name = trimmed_str_field(body, "subtopic_name");

    if title.is_empty() {
        errors.insert("title".into(), "Title is required.".into());
    }
    if content.is_empty() {
        errors.insert("content".into(), "Content is required.".into());
    }
    if domain_name.is_empty() {
        errors.insert("domain_name".into(), "Domain name is required.".into());
    }
    if subtopic_name.is_empty() {
        errors.insert("subtopic_name".into(), "Subtopic name is required.".into());
    }

    let is_template = match body.get("is_template") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.insert("is_template".into(), "is_template must be a boolean.".into());
            false
        }
    };

    let configurable_options = match body.get("configurable_options") {
        None | Some(Value::Null) => None,
        Some(value @ Value::Object(_)) => Some(value.clone()),
        Some(_) => {
            errors.insert(
                "configurable_options".into(),
                "configurable_options must be a JSON object.".into(),
            );
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PromptFields {
        title,
        content,
        domain_name,
        subtopic_name,
        is_template,
        configurable_options,
    })
}
