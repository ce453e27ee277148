//! Model and provider descriptors (Value Objects)

use std::fmt;

/// A selectable chat model: human-readable name plus provider-specific identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelDescriptor {
    pub display_name: &'static str,
    pub id: &'static str,
}

impl ModelDescriptor {
    pub const fn new(display_name: &'static str, id: &'static str) -> Self {
        Self { display_name, id }
    }
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

/// Identity of a model provider, used as the key when catalogs from several
/// providers are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderInfo {
    pub key: &'static str,
    pub display_name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_display() {
        let descriptor = ModelDescriptor::new("First", "vendor.first-v1");
        assert_eq!(descriptor.to_string(), "First (vendor.first-v1)");
    }

    #[test]
    fn test_descriptor_is_const_constructible() {
        const D: ModelDescriptor = ModelDescriptor::new("Second", "vendor.second-v1");
        assert_eq!(D.display_name, "Second");
        assert_eq!(D.id, "vendor.second-v1");
    }
}
