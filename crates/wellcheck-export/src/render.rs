use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::view::{QuestionnaireView, ResultView};

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const RESULT_TEMPLATE: &str = include_str!("../templates/result.html");

/// Compiled page templates. Build once and share; rendering takes `&self`.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("result.html", RESULT_TEMPLATE),
        ])
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

        Ok(Self { tera })
    }

    /// The full questionnaire as a single form posting to `/submit`.
    pub fn render_questionnaire(&self) -> Result<String, ExportError> {
        self.render("index.html", &QuestionnaireView::new())
    }

    pub fn render_result(&self, view: &ResultView) -> Result<String, ExportError> {
        self.render("result.html", view)
    }

    fn render<T: Serialize>(&self, template_name: &str, view: &T) -> Result<String, ExportError> {
        // Views go through serde_json so Tera sees plain maps and lists.
        let value = serde_json::to_value(view)?;
        let context = Context::from_value(value)
            .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

        let rendered = self.tera.render(template_name, &context)?;
        tracing::debug!(template = template_name, bytes = rendered.len(), "rendered page");
        Ok(rendered)
    }
}
