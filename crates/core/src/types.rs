/// Catalog identifiers are assigned sequentially starting at 1.
pub type DbId = i64;
