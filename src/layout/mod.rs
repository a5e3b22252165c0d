//! Page layout: geometry defaults, the pagination controller, and the
//! paragraph/table flow engines.

mod paginator;
mod paragraph;
mod style;
mod table;

pub use paginator::Paginator;
pub use paragraph::flow_paragraph;
pub use style::PageStyle;
pub use table::flow_table;
