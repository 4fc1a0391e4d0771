//! Routes parsed commands to the catalog controller.

use catalog_core::{CatalogController, ProductSource};

use crate::controller::commands::{StorefrontCommand, HELP_TEXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    Message(String),
    Quit,
}

pub fn dispatch_command<S: ProductSource>(
    controller: &mut CatalogController<S>,
    cmd: StorefrontCommand,
) -> DispatchOutcome {
    let cmd_name = match &cmd {
        StorefrontCommand::Category(_) => "category",
        StorefrontCommand::ListCategories => "categories",
        StorefrontCommand::Sort(_) => "sort",
        StorefrontCommand::Search(_) => "search",
        StorefrontCommand::ToggleTheme => "theme",
        StorefrontCommand::Help => "help",
        StorefrontCommand::Quit => "quit",
    };
    tracing::debug!(command = cmd_name, "dispatching storefront command");

    match cmd {
        StorefrontCommand::Category(selected) => {
            controller.on_category_change(&selected);
            DispatchOutcome::Handled
        }
        StorefrontCommand::ListCategories => {
            let categories = &controller.view_state().categories;
            if categories.is_empty() {
                DispatchOutcome::Message("No categories loaded.".to_string())
            } else {
                DispatchOutcome::Message(format!("Categories: {}", categories.join(", ")))
            }
        }
        StorefrontCommand::Sort(order) => {
            controller.on_sort_change(&order);
            DispatchOutcome::Handled
        }
        StorefrontCommand::Search(query) => {
            // Detached: the search renders on its own once the delay elapses.
            let _ = controller.on_search(&query);
            DispatchOutcome::Handled
        }
        StorefrontCommand::ToggleTheme => {
            controller.on_toggle_theme();
            DispatchOutcome::Handled
        }
        StorefrontCommand::Help => DispatchOutcome::Message(HELP_TEXT.to_string()),
        StorefrontCommand::Quit => DispatchOutcome::Quit,
    }
}
