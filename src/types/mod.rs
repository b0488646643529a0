pub mod iter;
pub mod value;

pub use iter::{Children, Entries, Entry};
pub use value::ValueRef;
