pub mod keywords;
pub mod messages;

pub use keywords::add_emojis;
