//! Defines the properties for the `MahasiswaComponent`.

use common::config::ClientConfig;
use yew::prelude::*;

/// Properties for the `MahasiswaComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct MahasiswaProps {
    /// Endpoints, page size, loading semantics and modal id.
    ///
    /// Read when the component is created and whenever an effect needs an
    /// endpoint; defaults to the public student API.
    #[prop_or_default]
    pub config: ClientConfig,
}
