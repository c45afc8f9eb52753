// src/app.rs
use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::fragments::{BuiltinFragments, DirFragments, FragmentSource};

/// Everything a request handler reads. Built once in `main`, never mutated.
pub struct App {
    config: Config,
    catalog: Catalog,
    fragments: Box<dyn FragmentSource>,
}

impl App {
    pub fn new(config: Config, catalog: Catalog, fragments: Box<dyn FragmentSource>) -> Self {
        Self {
            config,
            catalog,
            fragments,
        }
    }

    pub fn from_config(config: Config) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog");
                Catalog::load(path)?
            }
            None => Catalog::builtin(),
        };

        let fragments: Box<dyn FragmentSource> = match &config.fragments_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "serving fragments from disk");
                Box::new(DirFragments::new(dir))
            }
            None => Box::new(BuiltinFragments),
        };

        Ok(Self::new(config, catalog, fragments))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn fragments(&self) -> &dyn FragmentSource {
        self.fragments.as_ref()
    }
}
