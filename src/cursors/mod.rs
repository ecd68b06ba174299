pub mod byte;

pub use byte::ByteCursor;
