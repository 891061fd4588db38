//! Configuration option values for render passes.
//!
//! Pass options are an open string-keyed mapping: each pass type declares the
//! options it understands and the host engine interprets them. The mapping
//! preserves insertion order so a graph description serializes
//! deterministically.

use std::fmt;

/// Face culling mode for rasterizing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// No culling.
    None,
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    #[default]
    Back,
}

impl fmt::Display for CullMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// Sub-pixel sample placement for passes that ray trace the primary hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePattern {
    /// Single sample at the pixel center.
    #[default]
    Center,
    /// DirectX MSAA sample positions.
    DirectX,
    /// Halton low-discrepancy sequence.
    Halton,
    /// Stratified (jittered grid) sampling.
    Stratified,
}

impl fmt::Display for SamplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::DirectX => write!(f, "directx"),
            Self::Halton => write!(f, "halton"),
            Self::Stratified => write!(f, "stratified"),
        }
    }
}

/// A single configuration option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Free-form string value.
    String(String),
    /// Culling mode selector.
    CullMode(CullMode),
    /// Sample pattern selector.
    SamplePattern(SamplePattern),
}

impl OptionValue {
    /// Get the value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(v) = self { Some(*v) } else { None }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        if let Self::Int(v) = self { Some(*v) } else { None }
    }

    /// Get the value as a float, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        if let Self::Float(v) = self { Some(*v) } else { None }
    }

    /// Get the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(v) = self { Some(v) } else { None }
    }

    /// Get the value as a cull mode, if it is one.
    pub fn as_cull_mode(&self) -> Option<CullMode> {
        if let Self::CullMode(v) = self { Some(*v) } else { None }
    }

    /// Get the value as a sample pattern, if it is one.
    pub fn as_sample_pattern(&self) -> Option<SamplePattern> {
        if let Self::SamplePattern(v) = self { Some(*v) } else { None }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
            Self::CullMode(v) => write!(f, "{v}"),
            Self::SamplePattern(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<CullMode> for OptionValue {
    fn from(v: CullMode) -> Self {
        Self::CullMode(v)
    }
}

impl From<SamplePattern> for OptionValue {
    fn from(v: SamplePattern) -> Self {
        Self::SamplePattern(v)
    }
}

/// Ordered string-to-value mapping of pass configuration options.
///
/// Later `set` calls for an existing key overwrite the value in place, so
/// iteration order is the order keys were first introduced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassOptions {
    entries: Vec<(String, OptionValue)>,
}

impl PassOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, returning self for chaining.
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an option in place.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Look up a bool option by name.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(OptionValue::as_bool)
    }

    /// Look up an integer option by name.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(OptionValue::as_int)
    }

    /// Look up a float option by name.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(OptionValue::as_float)
    }

    /// Number of options in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_chaining() {
        let options = PassOptions::new()
            .with("forceCullMode", false)
            .with("cull", CullMode::Back)
            .with("samplePattern", SamplePattern::Stratified)
            .with("sampleCount", 16);

        assert_eq!(options.len(), 4);
        assert_eq!(options.get_bool("forceCullMode"), Some(false));
        assert_eq!(options.get_int("sampleCount"), Some(16));
        assert_eq!(
            options.get("cull").and_then(OptionValue::as_cull_mode),
            Some(CullMode::Back)
        );
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut options = PassOptions::new().with("exposureValue", 0.0).with("autoExposure", false);

        options.set("exposureValue", 1.5);

        assert_eq!(options.get_float("exposureValue"), Some(1.5));
        // Insertion order is preserved across overwrites.
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["exposureValue", "autoExposure"]);
    }

    #[test]
    fn test_wrong_type_lookup() {
        let options = PassOptions::new().with("enableAccumulation", true);
        assert_eq!(options.get_int("enableAccumulation"), None);
        assert_eq!(options.get_bool("missing"), None);
    }

    #[test]
    fn test_idempotent_construction() {
        let build = || PassOptions::new().with("useVBuffer", false).with("useAnalyticLights", false);
        assert_eq!(build(), build());
    }
}
