//! UI Components
//!
//! Leptos components rendering the trip session.

mod trip_bar;
mod new_item_form;
mod edit_toggle;
mod item_list;
mod item_row;
mod feedback_line;

pub use trip_bar::TripBar;
pub use new_item_form::NewItemForm;
pub use edit_toggle::EditToggle;
pub use item_list::ItemList;
pub use item_row::ItemRowView;
pub use feedback_line::FeedbackLine;
