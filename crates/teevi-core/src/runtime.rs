//! Host runtime context passed to extension entry points.
//!
//! The host hands every extension an explicit, read-only context value
//! instead of injecting an ambient global into its execution environment.

use std::collections::HashMap;

/// Read-only view of the host environment for one extension instance.
#[derive(Debug, Clone, Default)]
pub struct RuntimeContext {
    language: Option<String>,
    user_agent: Option<String>,
    inputs: HashMap<String, String>,
}

impl RuntimeContext {
    pub fn new() -> Self {
        RuntimeContext::default()
    }

    /// Set the host language as a BCP 47 tag (e.g. "en", "it").
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the configured value for an input declared in the manifest.
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(id.into(), value.into());
        self
    }

    /// The current language setting as a BCP 47 tag.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The user agent of the client, if the host exposes one.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Look up the configured value for an input by its manifest id.
    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.inputs.get(id).map(String::as_str)
    }
}
