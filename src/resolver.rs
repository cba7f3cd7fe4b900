//! Layered resource attribute resolution.
//!
//! Attributes are drawn from three ranked sources:
//!
//! 1. Explicit attributes from application configuration
//!    ([`AppConfig::resource_attributes`]).
//! 2. The reserved environment variables `OTEL_RESOURCE_ATTRIBUTES` and
//!    `OTEL_SERVICE_NAME`.
//! 3. Application metadata (`application.name` / `application.group`).
//!
//! Explicit attributes and environment variables are mutually exclusive: a
//! non-empty explicit map disables environment parsing entirely rather than
//! merging with it. Application metadata only ever backfills the two
//! identity keys, `service.name` and `service.group`. When nothing supplies
//! a service name, it defaults to `unknown_service`.
//!
//! An empty explicit map counts as absent and falls through to the
//! environment path.

use crate::attributes::AttributeSet;
use crate::config::{AppConfig, ApplicationMetadata};
use crate::env::{EnvSource, OTEL_RESOURCE_ATTRIBUTES, OTEL_SERVICE_NAME};

/// Attribute key carrying the service name. Always present in resolved
/// output.
pub const SERVICE_NAME: &str = "service.name";

/// Attribute key carrying the service group. Omitted when no source
/// supplies it.
pub const SERVICE_GROUP: &str = "service.group";

/// Service name used when neither configuration nor environment provides
/// one.
pub const DEFAULT_SERVICE_NAME: &str = "unknown_service";

/// One-shot resolver producing a merged [`AttributeSet`] from its three
/// input sources.
///
/// Holds only borrows; construct one per resolution need and discard it.
/// All inputs are read-only, so a single instance may also be shared across
/// threads.
#[derive(Clone, Copy)]
pub struct ResourceAttributes<'a> {
    metadata: &'a ApplicationMetadata,
    explicit: Option<&'a AttributeSet>,
    env: &'a dyn EnvSource,
}

impl<'a> ResourceAttributes<'a> {
    /// Create a resolver from its three sources. `explicit` may be `None`
    /// or empty; both mean "not configured".
    pub fn new(
        metadata: &'a ApplicationMetadata,
        explicit: Option<&'a AttributeSet>,
        env: &'a dyn EnvSource,
    ) -> Self {
        Self {
            metadata,
            explicit,
            env,
        }
    }

    /// Create a resolver backed by a loaded [`AppConfig`].
    pub fn from_config(config: &'a AppConfig, env: &'a dyn EnvSource) -> Self {
        Self::new(
            &config.application,
            Some(&config.resource_attributes),
            env,
        )
    }

    /// Resolve the final attribute set.
    ///
    /// Infallible: every source is optional and the result always carries a
    /// non-empty `service.name`.
    pub fn resolve(&self) -> AttributeSet {
        let mut attributes = match self.explicit {
            Some(explicit) if !explicit.is_empty() => explicit.clone(),
            _ => self.attributes_from_env(),
        };
        if !attributes.contains_key(SERVICE_NAME) {
            let name = self.metadata.name().unwrap_or(DEFAULT_SERVICE_NAME);
            attributes.put(SERVICE_NAME, name);
        }
        if !attributes.contains_key(SERVICE_GROUP) {
            if let Some(group) = self.metadata.group() {
                attributes.put(SERVICE_GROUP, group);
            }
        }
        attributes
    }

    /// Resolve and feed each attribute into `sink`, one call per entry, in
    /// insertion order.
    pub fn apply_to(&self, mut sink: impl FnMut(&str, &str)) {
        for (key, value) in self.resolve().iter() {
            sink(key, value);
        }
    }

    /// Parse attributes from `OTEL_RESOURCE_ATTRIBUTES`, then let
    /// `OTEL_SERVICE_NAME` fill `service.name` if the list did not.
    ///
    /// Segment grammar: comma-separated, each segment trimmed, blank
    /// segments skipped, split on the first `=` (a segment without one, or
    /// with a leading `=`, is an entire key with empty value), key and value
    /// trimmed, last duplicate wins.
    fn attributes_from_env(&self) -> AttributeSet {
        let mut attributes = AttributeSet::new();
        if let Some(raw) = self.env.var(OTEL_RESOURCE_ATTRIBUTES) {
            for segment in raw.split(',') {
                let segment = segment.trim();
                if segment.is_empty() {
                    continue;
                }
                let (key, value) = match segment.find('=') {
                    Some(index) if index > 0 => (&segment[..index], &segment[index + 1..]),
                    _ => (segment, ""),
                };
                attributes.put(key.trim(), value.trim());
            }
        }
        if let Some(service_name) = self.env.var(OTEL_SERVICE_NAME) {
            if !attributes.contains_key(SERVICE_NAME) {
                attributes.put(SERVICE_NAME, service_name);
            }
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(
        metadata: &ApplicationMetadata,
        explicit: Option<&AttributeSet>,
        env: &HashMap<String, String>,
    ) -> AttributeSet {
        ResourceAttributes::new(metadata, explicit, env).resolve()
    }

    #[test]
    fn test_segment_without_equals_yields_empty_value() {
        let metadata = ApplicationMetadata::default();
        let mut env = HashMap::new();
        env.insert(
            OTEL_RESOURCE_ATTRIBUTES.to_string(),
            "standalone".to_string(),
        );
        let attributes = resolve(&metadata, None, &env);
        assert_eq!(attributes.get("standalone"), Some(""));
    }

    #[test]
    fn test_leading_equals_keeps_whole_segment_as_key() {
        let metadata = ApplicationMetadata::default();
        let mut env = HashMap::new();
        env.insert(
            OTEL_RESOURCE_ATTRIBUTES.to_string(),
            "=oddball".to_string(),
        );
        let attributes = resolve(&metadata, None, &env);
        assert_eq!(attributes.get("=oddball"), Some(""));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let metadata = ApplicationMetadata::default();
        let mut env = HashMap::new();
        env.insert(
            OTEL_RESOURCE_ATTRIBUTES.to_string(),
            "k=first, k=second".to_string(),
        );
        let attributes = resolve(&metadata, None, &env);
        assert_eq!(attributes.get("k"), Some("second"));
        // overwrite keeps the merged set at one entry plus service.name
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn test_keys_and_values_are_trimmed() {
        let metadata = ApplicationMetadata::default();
        let mut env = HashMap::new();
        env.insert(
            OTEL_RESOURCE_ATTRIBUTES.to_string(),
            "  spaced.key =  spaced value  ".to_string(),
        );
        let attributes = resolve(&metadata, None, &env);
        assert_eq!(attributes.get("spaced.key"), Some("spaced value"));
    }

    #[test]
    fn test_empty_explicit_map_falls_through_to_env() {
        let metadata = ApplicationMetadata::default();
        let explicit = AttributeSet::new();
        let mut env = HashMap::new();
        env.insert(OTEL_SERVICE_NAME.to_string(), "from-env".to_string());
        let attributes = resolve(&metadata, Some(&explicit), &env);
        assert_eq!(attributes.get(SERVICE_NAME), Some("from-env"));
    }

    #[test]
    fn test_apply_to_visits_every_entry_in_order() {
        let metadata = ApplicationMetadata {
            name: Some("svc".to_string()),
            group: Some("grp".to_string()),
        };
        let env = HashMap::new();
        let resolver = ResourceAttributes::new(&metadata, None, &env);
        let mut seen = Vec::new();
        resolver.apply_to(|key, value| seen.push((key.to_string(), value.to_string())));
        assert_eq!(
            seen,
            vec![
                (SERVICE_NAME.to_string(), "svc".to_string()),
                (SERVICE_GROUP.to_string(), "grp".to_string()),
            ]
        );
    }
}
