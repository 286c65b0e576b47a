//! Request descriptors: one REST call described before execution

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{ExecutorError, ExecutorResult};

/// Placeholder resolved by the executor from its own credentials
pub const ACCOUNT_SID_SEGMENT: &str = "AccountSid";

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter ends up on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Substituted into the `{Name}` placeholder of the resource template
    UrlSegment,
    /// Query string for GET and DELETE, form body for POST
    GetOrPost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Text(text) => f.write_str(text),
            ParameterValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        ParameterValue::Text(value.clone())
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl PartialEq<&str> for ParameterValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, ParameterValue::Text(text) if text == other)
    }
}

impl PartialEq<i64> for ParameterValue {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, ParameterValue::Integer(value) if value == other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
    pub kind: ParameterKind,
}

/// Resource template, method and ordered parameters of one REST call
///
/// Parameter names are unique: adding a name that is already present
/// replaces the value in place, so construction order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    resource: String,
    method: Method,
    parameters: Vec<Parameter>,
}

impl RestRequest {
    pub fn new(resource: impl Into<String>, method: Method) -> Self {
        Self {
            resource: resource.into(),
            method,
            parameters: Vec::new(),
        }
    }

    pub fn get(resource: impl Into<String>) -> Self {
        Self::new(resource, Method::Get)
    }

    pub fn post(resource: impl Into<String>) -> Self {
        Self::new(resource, Method::Post)
    }

    pub fn delete(resource: impl Into<String>) -> Self {
        Self::new(resource, Method::Delete)
    }

    /// Add a parameter substituted into the resource template
    pub fn url_segment(self, name: &str, value: impl Into<ParameterValue>) -> Self {
        self.with_parameter(name, value.into(), ParameterKind::UrlSegment)
    }

    /// Add a query or form parameter
    pub fn parameter(self, name: &str, value: impl Into<ParameterValue>) -> Self {
        self.with_parameter(name, value.into(), ParameterKind::GetOrPost)
    }

    /// Add a query or form parameter only when a value is present
    pub fn optional_parameter<V: Into<ParameterValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.parameter(name, value),
            None => self,
        }
    }

    fn with_parameter(mut self, name: &str, value: ParameterValue, kind: ParameterKind) -> Self {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                existing.value = value;
                existing.kind = kind;
            }
            None => self.parameters.push(Parameter {
                name: name.to_string(),
                value,
                kind,
            }),
        }
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Name/value pairs of the query or form parameters, in order
    pub fn get_or_post_pairs(&self) -> Vec<(String, String)> {
        self.parameters
            .iter()
            .filter(|p| p.kind == ParameterKind::GetOrPost)
            .map(|p| (p.name.clone(), p.value.to_string()))
            .collect()
    }

    /// Substitute `{AccountSid}` and every URL segment into the resource template
    pub fn resolve_path(&self, account_sid: &str) -> ExecutorResult<String> {
        let mut path = String::with_capacity(self.resource.len() + 64);
        let mut rest = self.resource.as_str();

        while let Some(start) = rest.find('{') {
            let end = rest[start..]
                .find('}')
                .map(|offset| start + offset)
                .ok_or_else(|| {
                    ExecutorError::InvalidRequest(format!(
                        "unterminated placeholder in resource {}",
                        self.resource
                    ))
                })?;
            let name = &rest[start + 1..end];

            let value = if name == ACCOUNT_SID_SEGMENT {
                account_sid.to_string()
            } else {
                self.parameters
                    .iter()
                    .find(|p| p.kind == ParameterKind::UrlSegment && p.name == name)
                    .map(|p| p.value.to_string())
                    .ok_or_else(|| {
                        ExecutorError::InvalidRequest(format!(
                            "no value for placeholder {{{}}} in resource {}",
                            name, self.resource
                        ))
                    })?
            };

            if value.is_empty() || value.contains(['/', '?', '#']) {
                return Err(ExecutorError::InvalidRequest(format!(
                    "invalid value {:?} for placeholder {{{}}}",
                    value, name
                )));
            }

            path.push_str(&rest[..start]);
            path.push_str(&value);
            rest = &rest[end + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }
}

/// Status and body of a completed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    pub status: u16,
    pub body: String,
}

impl RestResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> ExecutorResult<T> {
        serde_json::from_str(&self.body).map_err(ExecutorError::from)
    }
}
