use std::io::{self, Read};
use std::path::Path;

use reflow::normalize;

pub fn run(file: Option<&Path>) -> Result<(), i32> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            eprintln!("Error: failed to read {}: {e}", path.display());
            1
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|e| {
                eprintln!("Error: failed to read stdin: {e}");
                1
            })?;
            buf
        }
    };

    tracing::debug!(bytes = raw.len(), "normalizing");
    println!("{}", normalize(&raw));
    Ok(())
}
