//! Request descriptors and tagged request bodies.
//!
//! An [`ApiRequest`] is plain data: method, path, query pairs, extra headers
//! and a [`RequestBody`]. Building one never touches the network, which is
//! what lets every endpoint's shape be checked without a server.

use reqwest::Method;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

use fieldops_core::file::FileUpload;

use crate::error::ClientError;

/// Content type for structured bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type for file-bearing bodies. The boundary is appended by the
/// transport when the form is encoded.
pub const CONTENT_TYPE_MULTIPART: &str = "multipart/form-data";

// ---------------------------------------------------------------------------
// ApiRequest
// ---------------------------------------------------------------------------

/// Everything needed to issue one HTTP call against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, always starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Per-request headers on top of the client defaults.
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replace the query with the non-null fields of `params`.
    pub fn with_query<Q: Serialize>(mut self, params: &Q) -> Result<Self, ClientError> {
        self.query = to_pairs(params)?;
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Case-insensitive lookup of a per-request header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Absolute URL for this request under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

// ---------------------------------------------------------------------------
// RequestBody
// ---------------------------------------------------------------------------

/// Request payload, tagged by encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Structured body sent as JSON.
    Json(Value),
    /// File-bearing body sent as `multipart/form-data`.
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, ClientError> {
        Ok(Self::Json(serde_json::to_value(payload)?))
    }

    /// Encode a form submission.
    ///
    /// Multipart is chosen if and only if at least one file is attached;
    /// otherwise the same fields go out as JSON. Both encodings carry the
    /// same field names, so an edit stays a full replace either way.
    pub fn form<T: Serialize>(fields: &T, files: Vec<FilePart>) -> Result<Self, ClientError> {
        if files.is_empty() {
            return Self::json(fields);
        }
        Ok(Self::Multipart(MultipartForm {
            fields: form_pairs(fields)?,
            files,
        }))
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(CONTENT_TYPE_JSON),
            Self::Multipart(_) => Some(CONTENT_TYPE_MULTIPART),
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// Text fields and file parts of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn file(&self, name: &str) -> Option<&FileUpload> {
        self.files
            .iter()
            .find(|p| p.field == name)
            .map(|p| &p.file)
    }

    /// Encode into a transport form. Fails only on an unparsable MIME type.
    pub(crate) fn into_transport(self) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for FilePart { field, file } in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part(field, part);
        }
        Ok(form)
    }
}

/// A file attached under a named multipart field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file: FileUpload,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file: FileUpload) -> Self {
        Self {
            field: field.into(),
            file,
        }
    }
}

/// Collect an optional file into the part list for `field`.
pub(crate) fn optional_part(field: &str, file: Option<FileUpload>) -> Vec<FilePart> {
    file.map(|f| FilePart::new(field, f)).into_iter().collect()
}

// ---------------------------------------------------------------------------
// Flattening
// ---------------------------------------------------------------------------

/// Flatten query parameters into `(name, text)` pairs. `null` fields are
/// dropped so only the filters the caller set are sent.
fn to_pairs<T: Serialize>(value: &T) -> Result<Vec<(String, String)>, ClientError> {
    Ok(named_fields(value)?
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, field_text(value)))
        .collect())
}

/// Flatten form fields into multipart text parts.
///
/// Every field is kept. `null` becomes an empty part so a cleared value
/// still reaches the backend.
fn form_pairs<T: Serialize>(value: &T) -> Result<Vec<(String, String)>, ClientError> {
    Ok(named_fields(value)?
        .map(|(key, value)| (key, field_text(value)))
        .collect())
}

fn named_fields<T: Serialize>(
    value: &T,
) -> Result<impl Iterator<Item = (String, Value)>, ClientError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map.into_iter()),
        Value::Null => Ok(serde_json::Map::new().into_iter()),
        other => Err(ClientError::Encode(serde_json::Error::custom(format!(
            "expected a struct of named fields, got {other}"
        )))),
    }
}

/// Strings go through verbatim, numbers and booleans as their JSON text,
/// nested arrays and objects as compact JSON, `null` as an empty string.
fn field_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
