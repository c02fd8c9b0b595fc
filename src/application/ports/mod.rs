pub mod time;
pub mod util;
