mod strings;
pub mod timestamp;

pub use strings::{
    display_width,
    truncate_chars,
};
