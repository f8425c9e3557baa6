use crate::error::Result;
use crate::template::ImportResult;
use serde::Serialize;

pub fn output_data<T: Serialize>(data: &T, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        "yaml" => {
            println!("{}", serde_yaml::to_string(data)?);
        }
        "pretty" | _ => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

pub fn output_import_result(result: &ImportResult, format: &str) -> Result<()> {
    if format != "pretty" {
        return output_data(result, format);
    }

    println!("Template {} -> {}", result.template_uuid, result.target_uuid);
    for added in &result.added {
        println!("  ✓ {:<12} {} ({})", added.component_type, added.model, added.uuid);
    }
    for skipped in &result.skipped {
        println!("  ✗ {:<12} {}: {}", skipped.component_type, skipped.model, skipped.reason);
    }

    if result.success {
        print_success(&format!("Import finished: {}", result.summary()));
    } else {
        print_warning(&format!(
            "Import aborted: {} ({})",
            result.error.as_deref().unwrap_or("unknown error"),
            result.summary()
        ));
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

pub fn print_warning(message: &str) {
    println!("\x1b[33m⚠️  Warning: {}\x1b[0m", message);
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", message);
}
