use server_target::EndpointRegistry;
use std::path::Path;

use crate::commands::load_registry;

pub fn run_doctor(config_path: &Path) -> anyhow::Result<()> {
    let registry = load_registry(config_path)?;

    if registry.is_empty() {
        println!("No endpoints configured. Run `server-target add` first.");
        return Ok(());
    }

    let report = check_registry(&registry);

    println!("Checked {} endpoints.", registry.len());
    for (base_path, names) in &report.shared_destinations {
        println!("  Shared destination {}: {}", base_path, names.join(", "));
    }
    for (name, error) in &report.invalid_urls {
        println!("  {} - INVALID URL: {}", name, error);
    }
    match &report.default_error {
        Some(error) => println!("  Default endpoint: {}", error),
        None => println!("  Default endpoint: OK"),
    }

    println!("\nDoctor check complete.");
    Ok(())
}

struct CheckReport {
    shared_destinations: Vec<(String, Vec<String>)>,
    invalid_urls: Vec<(String, String)>,
    default_error: Option<String>,
}

fn check_registry(registry: &EndpointRegistry) -> CheckReport {
    let shared_destinations: Vec<(String, Vec<String>)> = registry
        .duplicate_groups()
        .into_iter()
        .map(|(base_path, names)| {
            (base_path, names.into_iter().map(String::from).collect())
        })
        .collect();

    let invalid_urls: Vec<(String, String)> = registry
        .iter()
        .filter_map(|(name, endpoint)| {
            endpoint
                .full_url("")
                .err()
                .map(|e| (name.to_string(), e.to_string()))
        })
        .collect();

    let default_error = registry.default_endpoint().err().map(|e| e.to_string());

    CheckReport {
        shared_destinations,
        invalid_urls,
        default_error,
    }
}
