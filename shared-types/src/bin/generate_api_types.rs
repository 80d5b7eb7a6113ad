use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the function payloads
    let mut types = Vec::new();

    // Event space types
    types.push(clean_type(EventSpace::export_to_string()?));
    types.push(clean_type(DeleteEventSpaceRequest::export_to_string()?));
    types.push(clean_type(DeleteEventSpaceResult::export_to_string()?));

    // Booking types
    types.push(clean_type(CancelBookingRequest::export_to_string()?));
    types.push(clean_type(CancelBookingResult::export_to_string()?));

    // Envelopes
    types.push(clean_type(FunctionSuccess::<()>::export_to_string()?));
    types.push(clean_type(FunctionFailure::export_to_string()?));

    let output_dir = Path::new("../frontend/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("functions.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Strips the generated-file banner and per-type imports, since every type
/// ends up in the same output file.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
