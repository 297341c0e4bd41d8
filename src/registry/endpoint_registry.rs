use crate::{Endpoint, Error, RegistryConfig, Result};
use std::collections::{BTreeMap, HashMap};

/// Named endpoints, for apps talking to more than one server.
///
/// Endpoint equality decides whether two names point at the same destination,
/// e.g. to share a connection pool or a cache between them.
#[derive(Debug, Default, Clone)]
pub struct EndpointRegistry {
	/// Kept in registration order, see [`EndpointRegistry::destinations`].
	endpoints: Vec<(String, Endpoint)>,
	default: Option<String>,
}

// region:    --- Mutations

impl EndpointRegistry {
	/// Registers `endpoint` under `name`, returning the endpoint it replaces, if any.
	///
	/// A replaced endpoint keeps its registration order.
	pub fn insert(&mut self, name: impl Into<String>, endpoint: Endpoint) -> Option<Endpoint> {
		let name = name.into();
		tracing::trace!(%name, %endpoint, "register endpoint");

		if let Some((_, existing)) = self.endpoints.iter_mut().find(|(n, _)| *n == name) {
			return Some(std::mem::replace(existing, endpoint));
		}
		self.endpoints.push((name, endpoint));
		None
	}

	/// Removes the endpoint named `name`. Removing the default endpoint clears the default.
	pub fn remove(&mut self, name: &str) -> Option<Endpoint> {
		let idx = self.endpoints.iter().position(|(n, _)| n == name)?;
		if self.default.as_deref() == Some(name) {
			self.default = None;
		}
		tracing::trace!(%name, "remove endpoint");
		Some(self.endpoints.remove(idx).1)
	}

	/// Makes `name` the default endpoint. The name must be registered.
	pub fn set_default(&mut self, name: impl Into<String>) -> Result<()> {
		let name = name.into();
		if self.get(&name).is_none() {
			return Err(Error::EndpointNotFound { name });
		}
		self.default = Some(name);
		Ok(())
	}

	/// Mutable access, e.g. to change the `service` of a registered endpoint.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Endpoint> {
		self.endpoints.iter_mut().find(|(n, _)| n == name).map(|(_, e)| e)
	}
}

// endregion: --- Mutations

// region:    --- Getters

impl EndpointRegistry {
	pub fn get(&self, name: &str) -> Option<&Endpoint> {
		self.endpoints.iter().find(|(n, _)| n == name).map(|(_, e)| e)
	}

	/// Like [`EndpointRegistry::get`], with an error for unknown names.
	pub fn try_get(&self, name: &str) -> Result<&Endpoint> {
		self.get(name).ok_or_else(|| Error::EndpointNotFound { name: name.to_string() })
	}

	pub fn default_name(&self) -> Option<&str> {
		self.default.as_deref()
	}

	pub fn default_endpoint(&self) -> Result<&Endpoint> {
		let name = self.default.as_deref().ok_or(Error::NoDefaultEndpoint)?;
		self.try_get(name)
	}

	/// Returns `name`'s endpoint, or the default one when `name` is `None`.
	pub fn resolve(&self, name: Option<&str>) -> Result<&Endpoint> {
		match name {
			Some(name) => self.try_get(name),
			None => self.default_endpoint(),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Endpoint)> {
		self.endpoints.iter().map(|(n, e)| (n.as_str(), e))
	}

	pub fn len(&self) -> usize {
		self.endpoints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.endpoints.is_empty()
	}
}

// endregion: --- Getters

// region:    --- Routing

impl EndpointRegistry {
	/// Full request URL for `api` on the endpoint named `name`.
	pub fn full_path(&self, name: &str, api: &str) -> Result<String> {
		Ok(self.try_get(name)?.full_path(api))
	}

	/// Whether the two names point at the same server (scheme, host and port).
	pub fn same_destination(&self, a: &str, b: &str) -> Result<bool> {
		Ok(self.try_get(a)? == self.try_get(b)?)
	}

	/// One `(name, endpoint)` per distinct destination, the first registered name winning.
	pub fn destinations(&self) -> Vec<(&str, &Endpoint)> {
		let mut destinations: Vec<(&str, &Endpoint)> = Vec::new();
		for (name, endpoint) in self.iter() {
			if !destinations.iter().any(|(_, e)| *e == endpoint) {
				destinations.push((name, endpoint));
			}
		}
		destinations
	}

	/// The names sharing a destination with at least one other name, grouped by base path.
	pub fn duplicate_groups(&self) -> BTreeMap<String, Vec<&str>> {
		let mut by_base_path: HashMap<String, Vec<&str>> = HashMap::new();
		for (name, endpoint) in self.iter() {
			by_base_path.entry(endpoint.base_path()).or_default().push(name);
		}
		by_base_path.into_iter().filter(|(_, names)| names.len() > 1).collect()
	}
}

// endregion: --- Routing

// region:    --- Conversions

impl EndpointRegistry {
	pub fn to_config(&self) -> RegistryConfig {
		RegistryConfig {
			default: self.default.clone(),
			endpoints: self.endpoints.iter().cloned().collect(),
		}
	}
}

// endregion: --- Conversions

// region:    --- Tests


// endregion: --- Tests
