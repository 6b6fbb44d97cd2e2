pub mod board;
pub mod render;
pub mod table;

pub use board::{Board, HISTORY_TABLE_ID, PRICE_TABLE_ID, REFRESH_CONTROL_ID};
pub use render::{DEFAULT_HISTORY_LIMIT, history_row, price_row, render_history, render_latest};
pub use table::TableBody;
