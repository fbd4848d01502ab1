pub mod browser;
pub mod style;

use chrono::{Datelike, Local};

// footer copyright year, taken from the visitor's clock
pub fn current_year() -> i32 {
    Local::now().year()
}
