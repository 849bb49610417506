use std::sync::OnceLock;

use boxgen_core::error::{BoxError, Result};
use tera::{Context as TeraContext, Tera};

use super::VAGRANTFILE_NAME;
use crate::BoxDescriptor;

/// Template engine holding the single embedded Vagrantfile template.
static VAGRANT_TERA: OnceLock<std::result::Result<Tera, String>> = OnceLock::new();

fn get_vagrant_tera() -> Result<&'static Tera> {
    VAGRANT_TERA
        .get_or_init(|| {
            let mut tera = Tera::default();
            // Values are substituted verbatim
            tera.autoescape_on(vec![]);
            tera.add_raw_template(VAGRANTFILE_NAME, include_str!("Vagrantfile.tera"))
                .map_err(|e| format!("failed to parse Vagrantfile template: {e}"))?;
            Ok(tera)
        })
        .as_ref()
        .map_err(|e| BoxError::Render(e.clone()))
}

/// Render the Vagrantfile for `descriptor`.
pub fn render_vagrantfile(descriptor: &BoxDescriptor) -> Result<String> {
    let tera = get_vagrant_tera()?;
    let context = TeraContext::from_serialize(descriptor)
        .map_err(|e| BoxError::Render(format!("invalid template context: {e}")))?;

    tera.render(VAGRANTFILE_NAME, &context)
        .map_err(|e| BoxError::Render(format!("failed to render Vagrantfile: {e}")))
}
