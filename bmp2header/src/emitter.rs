///
/// Header Emission Module
///
/// Converts a binary input file into a C++ header embedding the raw
/// bytes as a constant array.
///
/// Pipeline:
/// 1. Validate the symbol prefix as a C++ identifier
/// 2. Read the input file fully into memory
/// 3. Render the header text (provenance comment, pragma, byte rows,
///    length constant)
/// 4. Write the header to the output path
///
/// The rendered array lists one `0x`-prefixed lowercase hex literal per
/// input byte, 16 per row, with no comma after the final byte. The
/// length constant is the decimal byte count.
///

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::identifier::is_valid_identifier;

/// Maximum number of byte literals per row of the array body.
const BYTES_PER_ROW: usize = 16;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid identifier `{0}`: expected [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdentifier(String),
}

/// Read `input`, render it as a C++ header, and write the result to
/// `output`. `var_name` prefixes the two generated symbols
/// (`<var_name>_data` and `<var_name>_len`).
///
/// The output file is created or truncated. A failure while writing may
/// leave a truncated file behind; no cleanup is attempted.
pub fn convert(input: &Path, output: &Path, var_name: &str) -> Result<(), ConvertError> {
    if !is_valid_identifier(var_name) {
        return Err(ConvertError::InvalidIdentifier(var_name.to_string()));
    }

    let data = fs::read(input)?;
    let header = render_header(input, &data, var_name);
    fs::write(output, header)?;

    Ok(())
}

/// Render the full header text for `data` in memory.
pub fn render_header(input: &Path, data: &[u8], var_name: &str) -> String {
    format!(
        "// Generated from {input}\n\
         #pragma once\n\
         \n\
         #include <cstdint>\n\
         \n\
         inline constexpr unsigned char {var_name}_data[] = {{\n\
         {rows}\
         }};\n\
         \n\
         inline constexpr unsigned int {var_name}_len = {len};\n",
        input = input.display(),
        rows = render_rows(data),
        len = data.len(),
    )
}

/// Render the array body: rows of up to 16 byte literals, four-space
/// indented, `", "` after every byte except the last in the sequence.
/// Empty input renders zero rows.
fn render_rows(data: &[u8]) -> String {
    // Each byte costs at most 6 characters ("0xNN, ") plus row overhead.
    let mut rows = String::with_capacity(data.len() * 6 + data.len() / BYTES_PER_ROW * 5 + 8);

    for (row, chunk) in data.chunks(BYTES_PER_ROW).enumerate() {
        rows.push_str("    ");
        for (col, byte) in chunk.iter().enumerate() {
            let _ = write!(rows, "0x{byte:02x}");
            if row * BYTES_PER_ROW + col + 1 < data.len() {
                rows.push_str(", ");
            }
        }
        rows.push('\n');
    }

    rows
}
