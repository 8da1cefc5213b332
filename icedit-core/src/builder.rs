//! Builder utilities for configuring cluster-editing runs.
//!
//! Exposes the configuration surface used before constructing
//! [`ClusterEditor`] instances.

use crate::{editor::ClusterEditor, graph::EdgeBundling};

/// Configures and constructs [`ClusterEditor`] instances.
///
/// # Examples
/// ```
/// use icedit_core::{ClusterEditorBuilder, EdgeBundling};
///
/// let editor = ClusterEditorBuilder::new()
///     .with_bundling(EdgeBundling::Mean)
///     .with_component_splitting(false)
///     .build();
/// assert_eq!(editor.bundling(), EdgeBundling::Mean);
/// assert!(!editor.component_splitting());
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEditorBuilder {
    bundling: EdgeBundling,
    component_splitting: bool,
}

impl Default for ClusterEditorBuilder {
    fn default() -> Self {
        Self {
            bundling: EdgeBundling::Reject,
            component_splitting: true,
        }
    }
}

impl ClusterEditorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use icedit_core::{ClusterEditorBuilder, EdgeBundling};
    ///
    /// let builder = ClusterEditorBuilder::new();
    /// assert_eq!(builder.bundling(), EdgeBundling::Reject);
    /// assert!(builder.component_splitting());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how repeated observations of a pair are treated.
    #[must_use]
    pub fn with_bundling(mut self, bundling: EdgeBundling) -> Self {
        self.bundling = bundling;
        self
    }

    /// Enables or disables bundling of repeated pairs.
    ///
    /// Enabling keeps an already selected combining mode and otherwise sums
    /// repeated weights; disabling rejects repeated pairs.
    ///
    /// # Examples
    /// ```
    /// use icedit_core::{ClusterEditorBuilder, EdgeBundling};
    ///
    /// let builder = ClusterEditorBuilder::new().with_bundle_edges(true);
    /// assert_eq!(builder.bundling(), EdgeBundling::Sum);
    /// assert!(builder.bundle_edges());
    /// ```
    #[must_use]
    pub fn with_bundle_edges(mut self, enabled: bool) -> Self {
        self.bundling = match (enabled, self.bundling) {
            (false, _) => EdgeBundling::Reject,
            (true, EdgeBundling::Reject) => EdgeBundling::Sum,
            (true, combining) => combining,
        };
        self
    }

    /// Returns the configured bundling mode.
    #[must_use]
    #[rustfmt::skip]
    pub fn bundling(&self) -> EdgeBundling { self.bundling }

    /// Returns whether repeated pairs are combined rather than rejected.
    #[must_use]
    pub fn bundle_edges(&self) -> bool {
        self.bundling != EdgeBundling::Reject
    }

    /// Controls whether each positive component is solved independently.
    #[must_use]
    pub fn with_component_splitting(mut self, enabled: bool) -> Self {
        self.component_splitting = enabled;
        self
    }

    /// Returns whether positive components are solved independently.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_splitting(&self) -> bool { self.component_splitting }

    /// Constructs a [`ClusterEditor`] with this configuration.
    #[must_use]
    pub fn build(self) -> ClusterEditor {
        ClusterEditor::new(self.bundling, self.component_splitting)
    }
}
