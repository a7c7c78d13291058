//! Shared test fixtures for the singleton-wrap crate.

use std::collections::HashMap;

use singleton_wrap::Construct;

pub type Attributes = HashMap<String, String>;

/// Minimal attribute-map model in the spirit of the client-side framework the
/// wrapper was written against: construction takes an attribute map plus an
/// option map, and both stay readable on the instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeModel {
    attributes: Attributes,
    options: Attributes,
}

impl AttributeModel {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

impl Construct for AttributeModel {
    type Args = (Attributes, Attributes);

    fn construct((attributes, options): Self::Args) -> Self {
        Self {
            attributes,
            options,
        }
    }
}

/// Builds an attribute map from literal pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
