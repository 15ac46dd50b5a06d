//! Properties of the `CarManagerComponent`.

use yew::prelude::*;

use crate::config::{ErrorReporting, DEFAULT_API_BASE};

#[derive(Properties, PartialEq, Clone)]
pub struct CarManagerProps {
    /// Collection endpoint. Item requests go to `{api_base}/{id}`.
    #[prop_or(AttrValue::Static(DEFAULT_API_BASE))]
    pub api_base: AttrValue,

    /// Whether failed requests are also shown to the user.
    #[prop_or_default]
    pub on_error: ErrorReporting,
}
