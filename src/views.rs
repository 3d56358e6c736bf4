use crate::error::CatformError;
use handlebars::{DirectorySourceOptions, Handlebars};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const INDEX: &str = "index";
pub const THANKS: &str = "thanks";

const INDEX_TEMPLATE: &str = include_str!("../templates/index.hbs");
const THANKS_TEMPLATE: &str = include_str!("../templates/thanks.hbs");

#[derive(Debug, Serialize)]
pub struct ThanksContext<'a> {
    pub name: &'a str,
}

/// Registered page templates, cheap to clone into router state.
#[derive(Clone)]
pub struct Views {
    registry: Arc<Handlebars<'static>>,
}

impl Views {
    /// Bundled templates only.
    pub fn bundled() -> Result<Self, CatformError> {
        Ok(Self {
            registry: Arc::new(bundled_registry()?),
        })
    }

    /// Bundled templates, then any `*.hbs` in `dir` replacing them by file stem.
    pub fn with_overrides(dir: &Path) -> Result<Self, CatformError> {
        let mut registry = bundled_registry()?;
        registry.register_templates_directory(dir, DirectorySourceOptions::default())?;
        info!(path = %dir.display(), "loaded template overrides");
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn index(&self) -> Result<String, CatformError> {
        Ok(self.registry.render(INDEX, &())?)
    }

    pub fn thanks(&self, name: &str) -> Result<String, CatformError> {
        Ok(self.registry.render(THANKS, &ThanksContext { name })?)
    }
}

fn bundled_registry() -> Result<Handlebars<'static>, CatformError> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);
    hb.register_template_string(INDEX, INDEX_TEMPLATE)?;
    hb.register_template_string(THANKS, THANKS_TEMPLATE)?;
    Ok(hb)
}
