use std::{collections::HashMap, future::Future, sync::Arc};

use async_trait::async_trait;

use crate::jrd::ResourceDescriptor;

/// Looks up the descriptor of a resource.
///
/// `rels` are the requested relation filters. Implementations may use
/// them to skip links, but don't have to: the responder filters again.
/// `None` answers the request with 404.
///
/// Any `Fn(String, Vec<String>) -> impl Future<Output = Option<ResourceDescriptor>>`
/// is a resolver.
#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    async fn resolve(&self, resource: &str, rels: &[String]) -> Option<ResourceDescriptor>;
}

#[async_trait]
impl<F, Fut> Resolver for F
where
    F: Fn(String, Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<ResourceDescriptor>> + Send + 'static,
{
    async fn resolve(&self, resource: &str, rels: &[String]) -> Option<ResourceDescriptor> {
        self(resource.to_string(), rels.to_vec()).await
    }
}

/// Fixed set of resources, keyed by their exact identifier
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Arc<HashMap<String, ResourceDescriptor>>,
}

impl Directory {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, ResourceDescriptor>> for Directory {
    fn from(entries: HashMap<String, ResourceDescriptor>) -> Self {
        Directory {
            entries: Arc::new(entries),
        }
    }
}

#[async_trait]
impl Resolver for Directory {
    async fn resolve(&self, resource: &str, _rels: &[String]) -> Option<ResourceDescriptor> {
        self.entries.get(resource).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jrd::Link;

    fn directory() -> Directory {
        let mut entries = HashMap::new();
        entries.insert("acct:alice@example.com".to_string(), ResourceDescriptor {
            aliases: Some(vec!["https://example.com/alice".to_string()]),
            links: Some(vec![Link::new("self").with_href("https://example.com/alice")]),
        });
        Directory::from(entries)
    }

    #[tokio::test]
    async fn directory_finds_exact_identifier() {
        let directory = directory();
        assert_eq!(directory.len(), 1);
        let descriptor = directory.resolve("acct:alice@example.com", &[]).await.unwrap();
        assert_eq!(descriptor.aliases.unwrap(), vec!["https://example.com/alice".to_string()]);
    }

    #[tokio::test]
    async fn directory_lookup_is_not_normalized() {
        let directory = directory();
        assert!(directory.resolve("acct:Alice@example.com", &[]).await.is_none());
        assert!(directory.resolve("alice@example.com", &[]).await.is_none());
    }

    #[tokio::test]
    async fn directory_ignores_rels() {
        let descriptor = directory()
            .resolve("acct:alice@example.com", &["other".to_string()]).await
            .unwrap();
        assert_eq!(descriptor.links.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn closures_are_resolvers() {
        let resolver = |resource: String, rels: Vec<String>| async move {
            (resource == "acct:bob@example.com").then(|| ResourceDescriptor {
                aliases: Some(rels),
                links: None,
            })
        };
        let descriptor = resolver.resolve("acct:bob@example.com", &["a".to_string()]).await.unwrap();
        assert_eq!(descriptor.aliases.unwrap(), vec!["a".to_string()]);
        assert!(resolver.resolve("acct:eve@example.com", &[]).await.is_none());
    }
}
