/**
 * Compiles the metadata schema and tracks the compiled-in metadata files.
 */

use std::{fs::File, io::{BufRead, BufReader}, path::Path};

use thiserror::Error;

const SCHEMA: &str = "resources/phonemetadata.proto";
const METADATA_FILES: [&str; 2] = [
    "resources/PhoneNumberMetadata.textproto",
    "resources/PhoneNumberMetadataForTesting.textproto",
];

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Metadata file {path} has no `metadata` entries")]
    EmptyMetadata { path: String },
}

/// Makes sure that every metadata file is readable and declares at least one
/// region, so that a broken resource fails the build instead of the first
/// call to the library.
fn check_metadata_file(path: &str) -> Result<(), BuildError> {
    let reader = BufReader::new(File::open(Path::new(path))?);
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.starts_with("metadata") {
            return Ok(());
        }
    }
    Err(BuildError::EmptyMetadata { path: path.to_string() })
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", SCHEMA);
    for path in METADATA_FILES {
        println!("cargo:rerun-if-changed={}", path);
        check_metadata_file(path)?;
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input(SCHEMA)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
