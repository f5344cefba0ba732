pub mod item_parser;
pub mod item_serializer;

pub use item_parser::{ParsedItems, parse_items};
pub use item_serializer::serialize_items;
