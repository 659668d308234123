use cellar_types::LOCK_SUFFIX;

/// Deterministic mapping from logical keys to object paths.
///
/// An object name is the configured prefix and the key joined by a single
/// `/`, with one leading slash stripped from each side. The mapping is
/// pure and injective for a fixed prefix: distinct keys always produce
/// distinct object names, and reads resolve exactly the names writes
/// produced.
#[derive(Clone, Debug)]
pub struct ObjectNaming {
    prefix: String,
}

impl ObjectNaming {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The object path for `key`.
    pub fn object_name(&self, key: &str) -> String {
        let prefix = self.prefix.strip_prefix('/').unwrap_or(&self.prefix);
        let key = key.strip_prefix('/').unwrap_or(key);
        format!("{prefix}/{key}")
    }

    /// The companion lock object path for `key`.
    pub fn lock_object_name(&self, key: &str) -> String {
        let mut name = self.object_name(key);
        name.push_str(LOCK_SUFFIX);
        name
    }

    /// The root under which every object of this backend lives.
    pub fn root(&self) -> String {
        self.object_name("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_prefix_and_key() {
        let naming = ObjectNaming::new("acme");
        assert_eq!(
            naming.object_name("certificates/example.org.crt"),
            "acme/certificates/example.org.crt"
        );
    }

    #[test]
    fn strips_one_leading_slash_from_each_side() {
        let naming = ObjectNaming::new("/acme");
        assert_eq!(naming.object_name("/key"), "acme/key");
        // Only the first slash goes; further slashes are part of the name.
        assert_eq!(naming.object_name("//key"), "acme//key");
    }

    #[test]
    fn lock_name_appends_suffix() {
        let naming = ObjectNaming::new("acme");
        assert_eq!(naming.lock_object_name("a/b"), "acme/a/b.lock");
    }

    #[test]
    fn root_ends_with_separator() {
        let naming = ObjectNaming::new("acme");
        assert_eq!(naming.root(), "acme/");
    }

    #[test]
    fn distinct_keys_map_to_distinct_names() {
        let naming = ObjectNaming::new("acme");
        let keys = ["a", "a/b", "b/a", "ab", "a.lock"];
        let names: Vec<_> = keys.iter().map(|k| naming.object_name(k)).collect();
        for (i, left) in names.iter().enumerate() {
            for right in &names[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn mapping_is_stable() {
        let naming = ObjectNaming::new("acme");
        assert_eq!(naming.object_name("k"), naming.object_name("k"));
    }
}
