// Terminal UI module using ratatui

mod app;
mod dashboard;
mod rows;
mod widgets;

pub use app::{App, InputMode, Page, Tab};
pub use dashboard::Dashboard;
pub use rows::{format_date, format_datetime, TableRow, NO_PHOTO};
