/// Derives backend keys for both index directions.
///
/// ```text
/// <namespace>:code:<full-url>   -> <code>      (forward index)
/// <namespace>:url:<code>        -> <full-url>  (reverse index)
/// ```
///
/// The two directions use different infixes so they can share one flat
/// keyspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    namespace: String,
}

pub const DEFAULT_NAMESPACE: &str = "dwarf";

impl KeySpace {
    /// Creates a key space rooted at `namespace`.
    ///
    /// # Arguments
    ///
    /// * `namespace` - Prefix put in front of every key, followed by a `:`.
    ///   A namespace of `dwarf:` yields `dwarf::code:` and `dwarf::url:`
    ///   keys, which is the layout written by earlier deployments.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key under which the code for `url` is stored.
    pub fn forward(&self, url: &str) -> String {
        format!("{}:code:{}", self.namespace, url)
    }

    /// Key under which the url for `code` is stored.
    pub fn reverse(&self, code: &str) -> String {
        format!("{}:url:{}", self.namespace, code)
    }

    /// Common prefix of every reverse key.
    pub fn reverse_prefix(&self) -> String {
        self.reverse("")
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
