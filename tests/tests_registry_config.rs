mod support;

use crate::support::{Result, new_temp_config_path, remove_temp_config};
use server_target::{Endpoint, EndpointRegistry, Error, RegistryConfig};

#[test]
fn test_save_then_load() -> Result<()> {
	// -- Setup & Fixtures
	let path = new_temp_config_path();
	let mut registry = EndpointRegistry::default();
	registry.insert("main", Endpoint::new("api.example.com").with_service("v1"));
	registry.insert("local", Endpoint::builder().with_scheme("http").with_port(8080).build("localhost"));
	registry.set_default("main")?;

	// -- Exec
	registry.to_config().save(&path)?;
	let loaded = RegistryConfig::load(&path)?.into_registry()?;

	// -- Check
	assert_eq!(loaded.default_name(), Some("main"));
	assert_eq!(loaded.resolve(None)?.full_path("users"), "https://api.example.com/v1/users");
	assert_eq!(loaded.full_path("local", "health")?, "http://localhost:8080//health");

	remove_temp_config(&path);
	Ok(())
}

#[test]
fn test_saved_json_layout() -> Result<()> {
	let path = new_temp_config_path();
	let mut registry = EndpointRegistry::default();
	registry.insert("main", Endpoint::new("api.example.com"));

	registry.to_config().save(&path)?;
	let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;

	assert_eq!(
		value,
		serde_json::json!({
			"endpoints": {
				"main": { "scheme": "https", "host": "api.example.com", "service": "" }
			}
		})
	);

	remove_temp_config(&path);
	Ok(())
}

#[test]
fn test_load_missing_file() -> Result<()> {
	let path = new_temp_config_path();

	let res = RegistryConfig::load(&path);
	assert!(matches!(res, Err(Error::ConfigRead { .. })));

	let config = RegistryConfig::load_or_default(&path)?;
	assert!(config.endpoints.is_empty());
	assert_eq!(config.default, None);

	Ok(())
}

#[test]
fn test_load_invalid_json() -> Result<()> {
	let path = new_temp_config_path();
	let dir = path.parent().ok_or("should have parent")?;
	std::fs::create_dir_all(dir)?;
	std::fs::write(&path, "{ not json")?;

	let res = RegistryConfig::load(&path);

	assert!(matches!(res, Err(Error::SerdeJson(_))));

	remove_temp_config(&path);
	Ok(())
}

#[test]
fn test_save_then_load_keeps_registration_order() -> Result<()> {
	// -- Setup & Fixtures
	let path = new_temp_config_path();
	let mut registry = EndpointRegistry::default();
	registry.insert("zeta", Endpoint::new("api.example.com").with_service("z"));
	registry.insert("alpha", Endpoint::new("api.example.com").with_service("a"));
	registry.insert("local", Endpoint::new("localhost"));

	// -- Exec
	registry.to_config().save(&path)?;
	let loaded = RegistryConfig::load(&path)?.into_registry()?;

	// -- Check
	let names: Vec<&str> = loaded.iter().map(|(n, _)| n).collect();
	assert_eq!(names, ["zeta", "alpha", "local"]);
	let winners: Vec<&str> = loaded.destinations().into_iter().map(|(n, _)| n).collect();
	assert_eq!(winners, ["zeta", "local"]);

	remove_temp_config(&path);
	Ok(())
}
