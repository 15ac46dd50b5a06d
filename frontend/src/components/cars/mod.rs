//! Car manager: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and helpers.
//!
//! The full car list is fetched once on first render and again after every
//! acknowledged create, update or delete.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::CarManagerProps;
pub use state::CarManagerComponent;

impl Component for CarManagerComponent {
    type Message = Msg;
    type Properties = CarManagerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CarManagerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(&self.manager, &ctx.link().callback(|msg: Msg| msg))
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
