//! HTML menu renderer
//!
//! Roots are always listed; an item's child list is only emitted when the
//! item is in the expanded set. The active item carries `class="active"`.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use menu_core::{DrawnMenu, MenuNode};

const MENU_TEMPLATE: &str = "menu";
const MENU_NODE_PARTIAL: &str = "menu_node";

#[derive(Serialize)]
struct MenuView {
    roots: Vec<MenuNode>,
}

pub struct MenuRenderer {
    registry: Handlebars<'static>,
}

impl MenuRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_partial(MENU_NODE_PARTIAL, include_str!("templates/menu_node.hbs"))?;
        registry.register_template_string(MENU_TEMPLATE, include_str!("templates/menu.hbs"))?;
        Ok(Self { registry })
    }

    /// Markup for `drawn`; an absent menu renders as an empty string.
    pub fn render(&self, drawn: Option<&DrawnMenu>) -> Result<String, RenderError> {
        let Some(drawn) = drawn else {
            return Ok(String::new());
        };

        let view = MenuView {
            roots: drawn.to_nodes(),
        };
        self.registry.render(MENU_TEMPLATE, &view)
    }
}
