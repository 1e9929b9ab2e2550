//! Shapes supported by trigrid.

pub use self::triangle::Triangle;

mod triangle;
