//! Runtime state of the car manager component.

use common::manager::CarManager;

/// State container for `CarManagerComponent`.
///
/// The list, form and editing marker all live in the owned [`CarManager`];
/// the component only adds what Yew itself needs.
pub struct CarManagerComponent {
    pub manager: CarManager,

    /// Guard so the initial fetch runs once, on the first render.
    pub loaded: bool,
}

impl CarManagerComponent {
    pub fn new() -> Self {
        Self {
            manager: CarManager::new(),
            loaded: false,
        }
    }
}
