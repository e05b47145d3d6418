//! Terminal output: the title banner and the About panel.

use crate::error::Result;
use colored::*;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

/// Everything the menu loop draws on screen.
pub trait Screen {
    fn clear(&mut self) -> Result<()>;

    /// Clears the screen and draws the banner for `app_name`.
    fn title_screen(&mut self, app_name: &str) -> Result<()>;

    fn print_line(&mut self, text: &str) -> Result<()>;

    /// Draws the boxed About panel crediting `author`.
    fn about_panel(&mut self, author: &str) -> Result<()>;
}

/// Banner drawn at the top of every screen.
pub fn render_title(app_name: &str) -> String {
    let rule = "═".repeat(app_name.chars().count() + 4);
    format!(
        "{}\n  {}\n{}\n",
        rule.cyan(),
        app_name.to_uppercase().cyan().bold(),
        rule.cyan()
    )
}

pub fn render_about_panel(author: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .add_row(vec![
            Cell::new("Author:")
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(author),
        ]);
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_contains_app_name() {
        let title = render_title("speckyboy-scraper");
        assert!(title.contains("SPECKYBOY-SCRAPER"));
        assert!(title.contains("═"));
    }

    #[test]
    fn test_about_panel_names_author_inside_a_box() {
        let panel = render_about_panel("Alex Lee");
        assert!(panel.contains("Author:"));
        assert!(panel.contains("Alex Lee"));
        assert!(panel.lines().count() >= 3, "expected top border, row, bottom border");
    }
}
