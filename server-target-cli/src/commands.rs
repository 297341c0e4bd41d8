use serde::Serialize;
use server_target::{Endpoint, EndpointRegistry, RegistryConfig};
use std::path::Path;

// ---------------------------------------------------------------------------
// Registry loading
// ---------------------------------------------------------------------------

pub fn load_registry(config_path: &Path) -> anyhow::Result<EndpointRegistry> {
    let registry = RegistryConfig::load_or_default(config_path)?.into_registry()?;
    if registry.is_empty() {
        tracing::warn!("no endpoints configured in {}", config_path.display());
    }
    Ok(registry)
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

pub fn run_resolve(
    config_path: &Path,
    api: &str,
    name: Option<&str>,
    service: Option<String>,
) -> anyhow::Result<()> {
    let registry = load_registry(config_path)?;
    println!("{}", resolve_full_path(&registry, api, name, service)?);
    Ok(())
}

fn resolve_full_path(
    registry: &EndpointRegistry,
    api: &str,
    name: Option<&str>,
    service: Option<String>,
) -> anyhow::Result<String> {
    let mut endpoint = registry.resolve(name)?.clone();
    if let Some(service) = service {
        endpoint.set_service(service);
    }
    Ok(endpoint.full_path(api))
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct EndpointRow<'a> {
    name: &'a str,
    default: bool,
    url: String,
}

fn endpoint_rows(registry: &EndpointRegistry) -> Vec<EndpointRow<'_>> {
    registry
        .iter()
        .map(|(name, endpoint)| EndpointRow {
            name,
            default: registry.default_name() == Some(name),
            url: endpoint.base_path_with_service(),
        })
        .collect()
}

pub fn run_list(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let registry = load_registry(config_path)?;
    let rows = endpoint_rows(&registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in rows {
        let marker = if row.default { "*" } else { " " };
        println!("{} {:<16} {}", marker, row.name, row.url);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

pub fn run_add(
    config_path: &Path,
    name: String,
    endpoint: Endpoint,
    make_default: bool,
) -> anyhow::Result<()> {
    let mut registry = load_registry(config_path)?;

    let replaced = registry.insert(name.clone(), endpoint);
    if make_default || registry.default_name().is_none() {
        registry.set_default(name.clone())?;
    }
    registry.to_config().save(config_path)?;

    match replaced {
        Some(previous) => println!("Replaced {} (was {})", name, previous),
        None => println!("Added {}", name),
    }
    Ok(())
}
