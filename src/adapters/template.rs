use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, context};

use crate::domain::site_paths::{DATA_FILE, OUTPUT_DIR, OUTPUT_FILE};
use crate::domain::{AppError, ColorPalette, HOSTING_BRANCH, PortfolioDocument, REMOTE, palette};
use crate::ports::{PageRenderer, RenderMode};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const PORTFOLIO_TEMPLATE: &str = "portfolio.html.j2";
const ADMIN_TEMPLATE: &str = "admin.html.j2";
const EXPLAIN_TEMPLATE: &str = "explain.html.j2";

/// Page renderer using Minijinja over the embedded templates.
pub struct MinijinjaPageRenderer {
    env: Environment<'static>,
}

impl MinijinjaPageRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        for file in TEMPLATES_DIR.files() {
            let Some(name) = file.path().to_str() else { continue };
            let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                template: name.to_string(),
                reason: "template is not valid UTF-8".to_string(),
            })?;
            env.add_template(name, source).map_err(|e| template_error(name, e))?;
        }

        Ok(Self { env })
    }

    /// Editor page listing the palette catalog and the current document.
    pub fn render_admin(&self, document: &PortfolioDocument) -> Result<String, AppError> {
        let document_json = serde_json::to_string_pretty(document)?;
        let ctx = context! {
            palettes => &palette::PALETTES[..],
            current_scheme => document.color_scheme.as_str(),
            document_json => document_json,
        };
        self.render_by_name(ADMIN_TEMPLATE, ctx)
    }

    /// Static page describing git, GitHub Pages and the deploy steps.
    pub fn render_explain(&self) -> Result<String, AppError> {
        let ctx = context! {
            remote => REMOTE,
            hosting_branch => HOSTING_BRANCH,
            data_file => DATA_FILE,
            output_dir => OUTPUT_DIR,
            output_file => format!("{OUTPUT_DIR}/{OUTPUT_FILE}"),
        };
        self.render_by_name(EXPLAIN_TEMPLATE, ctx)
    }

    fn render_by_name(&self, name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| template_error(name, e))?;
        template.render(ctx).map_err(|e| template_error(name, e))
    }
}

impl PageRenderer for MinijinjaPageRenderer {
    fn render(
        &self,
        document: &PortfolioDocument,
        palette: &ColorPalette,
        mode: RenderMode,
    ) -> Result<String, AppError> {
        let ctx = context! {
            doc => document,
            palette => palette,
            preview => mode == RenderMode::Preview,
        };
        self.render_by_name(PORTFOLIO_TEMPLATE, ctx)
    }
}

fn template_error(name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: name.to_string(), reason: err.to_string() }
}
