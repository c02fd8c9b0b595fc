pub mod time;
pub mod util;

pub use time::{INVALID_DATE, UtcDateFormatter, format_date, format_date_with, try_format_date};
pub use util::{DefaultSlugGenerator, slugify};
