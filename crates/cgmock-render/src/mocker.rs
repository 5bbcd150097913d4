//! The renderer entry point.

use cgmock_core::{CoreError, FunctionSignature, LibraryIdentity};

use crate::options::RenderOptions;
use crate::{definitions, header};

/// Renders the header and definitions documents for one library.
///
/// Both documents are derived from the same identity, options and ordered
/// function list, so the names they share always agree.
#[derive(Debug, Clone)]
pub struct Mocker<'a> {
    identity: LibraryIdentity,
    functions: &'a [FunctionSignature],
    options: RenderOptions,
}

impl<'a> Mocker<'a> {
    #[must_use]
    pub fn new(identity: LibraryIdentity, functions: &'a [FunctionSignature]) -> Self {
        Self {
            identity,
            functions,
            options: RenderOptions::default(),
        }
    }

    /// Derive the identity from `lib_name` and build a mocker with default options.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidLibraryName`] if `lib_name` is not a C identifier.
    pub fn for_library(
        lib_name: &str,
        functions: &'a [FunctionSignature],
    ) -> Result<Self, CoreError> {
        Ok(Self::new(LibraryIdentity::new(lib_name)?, functions))
    }

    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn identity(&self) -> &LibraryIdentity {
        &self.identity
    }

    #[must_use]
    pub const fn functions(&self) -> &[FunctionSignature] {
        self.functions
    }

    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Interface, mock, mock-pointer declaration, fixture and C forward
    /// declarations.
    #[must_use]
    pub fn render_header(&self) -> String {
        tracing::debug!(
            library = self.identity.namespace(),
            functions = self.functions.len(),
            "rendering header"
        );
        header::render(self)
    }

    /// Mock-pointer definition and one trampoline per function.
    ///
    /// `header_ref` is written as `#include "<header_ref>"`; `None` renders a
    /// headerless document.
    #[must_use]
    pub fn render_definitions(&self, header_ref: Option<&str>) -> String {
        tracing::debug!(
            library = self.identity.namespace(),
            functions = self.functions.len(),
            header = header_ref,
            "rendering definitions"
        );
        definitions::render(self, header_ref)
    }
}

#[cfg(test)]
mod tests;
