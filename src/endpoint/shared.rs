use crate::Endpoint;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, thread-safe handle to an `Endpoint` whose `service` can change
/// while other threads compose paths from it.
///
/// Clones share the same endpoint.
#[derive(Debug, Clone)]
pub struct SharedEndpoint {
	inner: Arc<RwLock<Endpoint>>,
}

/// Constructors
impl SharedEndpoint {
	pub fn new(endpoint: Endpoint) -> Self {
		Self {
			inner: Arc::new(RwLock::new(endpoint)),
		}
	}
}

impl From<Endpoint> for SharedEndpoint {
	fn from(endpoint: Endpoint) -> Self {
		Self::new(endpoint)
	}
}

/// Reads
impl SharedEndpoint {
	/// Returns a copy of the endpoint as it is now.
	pub fn snapshot(&self) -> Endpoint {
		self.read().clone()
	}

	pub fn base_path(&self) -> String {
		self.read().base_path()
	}

	pub fn base_path_with_service(&self) -> String {
		self.read().base_path_with_service()
	}

	pub fn full_path(&self, api: &str) -> String {
		self.read().full_path(api)
	}
}

/// Writes
impl SharedEndpoint {
	pub fn set_service(&self, service: impl Into<String>) {
		self.write().set_service(service);
	}
}

// -- Lock helpers. A poisoned lock still holds a whole `Endpoint`, so the guard is recovered.
impl SharedEndpoint {
	fn read(&self) -> RwLockReadGuard<'_, Endpoint> {
		self.inner.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, Endpoint> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner)
	}
}

impl PartialEq for SharedEndpoint {
	fn eq(&self, other: &Self) -> bool {
		// -- One lock at a time, each guard dropped before the next is taken.
		Arc::ptr_eq(&self.inner, &other.inner) || self.base_path() == other.base_path()
	}
}

impl Eq for SharedEndpoint {}

// region:    --- Tests


// endregion: --- Tests
