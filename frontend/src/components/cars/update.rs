//! Update function for the car manager component.
//!
//! Elm-style: `step` hands each `Msg` to the owned `CarManager` and decides
//! what follows, `update` carries that out. Requests are spawned by `run`,
//! which reports back with `CarsLoaded`, `Succeeded` or `RequestFailed`.

use common::manager::{CarManager, Effect, Mutation};
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::CarsApi;

use super::helpers::{alert, report_failure};
use super::messages::Msg;
use super::state::CarManagerComponent;

/// Side effect of a single message, if any.
#[derive(Debug, PartialEq)]
pub enum Action {
    Request(Effect),
    /// Blocking alert; nothing is sent.
    Alert(String),
    /// Failed request or refused action, routed by `ErrorReporting`.
    Report(String),
    /// Developer note for the console.
    Log(String),
}

#[derive(Debug, PartialEq)]
pub struct Step {
    pub render: bool,
    pub action: Option<Action>,
}

impl Step {
    fn render() -> Self {
        Self {
            render: true,
            action: None,
        }
    }

    fn then(render: bool, action: Action) -> Self {
        Self {
            render,
            action: Some(action),
        }
    }
}

/// Applies `msg` to `manager` without touching the browser.
pub fn step(manager: &mut CarManager, msg: Msg) -> Step {
    match msg {
        Msg::Fetch => Step::then(false, Action::Request(manager.fetch())),
        Msg::CarsLoaded { seq, cars } => {
            if manager.apply_fetch(seq, cars) {
                Step::render()
            } else {
                Step::then(
                    false,
                    Action::Log(format!("discarding stale car list from fetch #{seq}")),
                )
            }
        }
        Msg::SetField(field, value) => {
            manager.set_field(field, value);
            Step::render()
        }
        Msg::Submit => match manager.submit() {
            Ok(effect) => Step::then(false, Action::Request(effect)),
            Err(err) => Step::then(false, Action::Alert(err.to_string())),
        },
        Msg::Edit(car) => match manager.edit(&car) {
            Ok(()) => Step::render(),
            Err(err) => Step::then(false, Action::Report(err.to_string())),
        },
        Msg::CancelEdit => {
            manager.cancel_edit();
            Step::render()
        }
        Msg::Delete(id) => Step::then(false, Action::Request(manager.delete(id))),
        // Form reset and marker clear happen before the re-fetch goes out.
        Msg::Succeeded(mutation) => {
            Step::then(true, Action::Request(manager.mutation_succeeded(mutation)))
        }
        Msg::RequestFailed(message) => Step::then(false, Action::Report(message)),
    }
}

pub fn update(
    component: &mut CarManagerComponent,
    ctx: &Context<CarManagerComponent>,
    msg: Msg,
) -> bool {
    let Step { render, action } = step(&mut component.manager, msg);
    match action {
        Some(Action::Request(effect)) => run(ctx, effect),
        Some(Action::Alert(message)) => alert(&message),
        Some(Action::Report(message)) => report_failure(ctx.props().on_error, &message),
        Some(Action::Log(message)) => log!(message),
        None => {}
    }
    render
}

/// Issues the request described by `effect` and posts its outcome back to
/// the component.
fn run(ctx: &Context<CarManagerComponent>, effect: Effect) {
    let api = CarsApi::new(ctx.props().api_base.clone());
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = match effect {
            Effect::Fetch { seq } => api
                .list()
                .await
                .map(|cars| Msg::CarsLoaded { seq, cars })
                .map_err(|err| format!("Failed to fetch cars: {err}")),
            Effect::Create(car) => api
                .create(&car)
                .await
                .map(|()| Msg::Succeeded(Mutation::Created))
                .map_err(|err| format!("Failed to add car: {err}")),
            Effect::Update { id, car } => api
                .update(id, &car)
                .await
                .map(|()| Msg::Succeeded(Mutation::Updated { id }))
                .map_err(|err| format!("Failed to update car {id}: {err}")),
            Effect::Delete { id } => api
                .delete(id)
                .await
                .map(|()| Msg::Succeeded(Mutation::Deleted { id }))
                .map_err(|err| format!("Failed to delete car {id}: {err}")),
        };

        link.send_message(outcome.unwrap_or_else(Msg::RequestFailed));
    });
}
