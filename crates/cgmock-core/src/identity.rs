//! Symbol names derived from a library name.
//!
//! The header and the definitions document reference each other through these
//! names, so they are computed once and threaded into both renderings.

use serde::Serialize;

use crate::errors::CoreError;
use crate::spelling::is_identifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryIdentity {
    namespace: String,
    interface: String,
    mock: String,
    mock_object: String,
}

impl LibraryIdentity {
    /// Derive the identity for `lib_name`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidLibraryName`] if `lib_name` is not a C identifier.
    pub fn new(lib_name: &str) -> Result<Self, CoreError> {
        if !is_identifier(lib_name) {
            return Err(CoreError::InvalidLibraryName {
                name: lib_name.to_string(),
            });
        }
        let interface = format!("Lib{lib_name}Interface");
        Ok(Self {
            namespace: lib_name.to_string(),
            mock: format!("{interface}Mock"),
            interface,
            mock_object: format!("Lib{lib_name}MockObj"),
        })
    }

    /// Enclosing namespace of every generated type.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Abstract interface type, `Lib<Name>Interface`.
    #[must_use]
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Mock type, `Lib<Name>InterfaceMock`.
    #[must_use]
    pub fn mock(&self) -> &str {
        &self.mock
    }

    /// Global mock pointer, `Lib<Name>MockObj`.
    #[must_use]
    pub fn mock_object(&self) -> &str {
        &self.mock_object
    }

    /// The mock pointer as seen from outside the namespace.
    #[must_use]
    pub fn qualified_mock_object(&self) -> String {
        format!("{}::{}", self.namespace, self.mock_object)
    }
}
