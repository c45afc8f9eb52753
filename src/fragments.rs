// src/fragments.rs
use crate::modal;
use crate::nav;
use crate::query::Params;
use crate::templates::components::{footer_fragment, header_fragment};
use maud::{html, Markup, PreEscaped};
use std::path::PathBuf;
use thiserror::Error;

pub const HEADER_PATH: &str = "header.html";
pub const FOOTER_PATH: &str = "footer.html";
pub const HEADER_CONTAINER: &str = "header-container";
pub const FOOTER_CONTAINER: &str = "footer-container";

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("unknown fragment {0}")]
    Unknown(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where shared header/footer markup comes from.
pub trait FragmentSource: Send + Sync {
    fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

/// Header and footer rendered from the maud components.
pub struct BuiltinFragments;

impl FragmentSource for BuiltinFragments {
    fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        match path {
            HEADER_PATH => Ok(header_fragment().into_string()),
            FOOTER_PATH => Ok(footer_fragment().into_string()),
            other => Err(FragmentError::Unknown(other.to_string())),
        }
    }
}

/// Trusted `.html` files read from a directory on each request.
pub struct DirFragments {
    dir: PathBuf,
}

impl DirFragments {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FragmentSource for DirFragments {
    fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        if path.is_empty() || path.contains(['/', '\\']) || path.starts_with('.') {
            return Err(FragmentError::Unknown(path.to_string()));
        }

        let full = self.dir.join(path);
        std::fs::read_to_string(&full).map_err(|source| FragmentError::Read { path: full, source })
    }
}

pub struct FragmentLoader<'a> {
    source: &'a dyn FragmentSource,
}

impl<'a> FragmentLoader<'a> {
    pub fn new(source: &'a dyn FragmentSource) -> Self {
        Self { source }
    }

    /// Fragment text, or empty after logging when it cannot be loaded.
    pub fn load(&self, path: &str) -> String {
        match self.source.fetch(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(path, error = %err, "error loading fragment");
                String::new()
            }
        }
    }
}

/// Wraps injected markup in its placeholder container.
pub fn container(id: &str, content: &str) -> Markup {
    html! {
        div id=(id) { (PreEscaped(content)) }
    }
}

pub struct PageChrome {
    pub header: Markup,
    pub footer: Markup,
}

/// Header then footer, then highlight the nav link for `page_path` and point
/// the shared modal links at the current page state.
pub fn compose(source: &dyn FragmentSource, page_path: &str, params: &Params) -> PageChrome {
    let loader = FragmentLoader::new(source);
    let header = loader.load(HEADER_PATH);
    let footer = loader.load(FOOTER_PATH);

    let header = nav::highlight(&header, nav::nav_id_for_path(page_path));
    let header = modal::carry_page_state(&header, page_path, params);
    let footer = modal::carry_page_state(&footer, page_path, params);

    PageChrome {
        header: container(HEADER_CONTAINER, &header),
        footer: container(FOOTER_CONTAINER, &footer),
    }
}
