//! Scope policy for URI generation.

use wikitree_ast::WikiNode;

use crate::{GeneratorScope, UriConfig, UriGenerator};

/// Mints node URIs under the configured [`GeneratorScope`].
///
/// With [`GeneratorScope::PerNode`] every call starts from empty
/// deduplication state. With [`GeneratorScope::Shared`] all calls through this
/// minter share one generator.
#[derive(Debug, Clone)]
pub struct UriMinter {
    config: UriConfig,
    shared: UriGenerator,
}

impl Default for UriMinter {
    fn default() -> Self {
        Self::new(UriConfig::default())
    }
}

impl UriMinter {
    pub fn new(config: UriConfig) -> Self {
        let shared = UriGenerator::from_config(&config);
        Self { config, shared }
    }

    pub fn config(&self) -> &UriConfig {
        &self.config
    }

    /// Mints a URI for `node` below `base_uri`.
    pub fn mint(&mut self, base_uri: &str, node: Option<WikiNode<'_>>) -> String {
        match self.config.scope {
            GeneratorScope::PerNode => {
                UriGenerator::from_config(&self.config).generate_for_node(base_uri, node)
            }
            GeneratorScope::Shared => self.shared.generate_for_node(base_uri, node),
        }
    }
}
