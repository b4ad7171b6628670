///
/// bmp2header - Embed binary image data as a C++ header
///
/// This crate converts a binary image file into a generated C++ header
/// that compiles the raw bytes directly into a program. It includes:
///
/// - emitter: header rendering and file conversion
/// - identifier: C++ symbol-name validation for the variable prefix
///
/// Entry points:
/// - `convert`: read an input file and write the generated header
/// - `render_header`: render the header text for an in-memory blob
///

pub mod emitter;
pub mod identifier;

pub use emitter::{convert, render_header, ConvertError};
pub use identifier::is_valid_identifier;
