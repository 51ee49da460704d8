//! Output types: the quantized image and its bank layout.

mod indexed_image;

pub use indexed_image::{BankSplit, IndexedImage};
