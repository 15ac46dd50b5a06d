//! View rendering for the car manager: a form card on top, the car list
//! below. The card's title and button follow the editing marker.
//!
//! Rendering only reads the `CarManager` and emits `Msg`s through `send`, so
//! it can be driven without a mounted component.

use common::manager::CarManager;
use common::model::car::Car;
use common::model::form::Field;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;

pub fn view(manager: &CarManager, send: &Callback<Msg>) -> Html {
    html! {
        <div id="root">
            <h1>{"🚗 Car Rental System"}</h1>
            { build_form_card(manager, send) }
            { build_car_list(manager.cars(), send) }
        </div>
    }
}

fn build_form_card(manager: &CarManager, send: &Callback<Msg>) -> Html {
    let form = manager.form();
    let editing = manager.is_editing();

    html! {
        <div class="card">
            <h2>{ if editing { "Update Car" } else { "Add New Car" } }</h2>
            { field_input(send, Field::Make, form.get(Field::Make), "Car Make (e.g., Toyota)", "text") }
            { field_input(send, Field::Model, form.get(Field::Model), "Car Model (e.g., Vios)", "text") }
            { field_input(send, Field::Year, form.get(Field::Year), "Year (e.g., 2020)", "number") }
            <button class="add" onclick={send.reform(|_: MouseEvent| Msg::Submit)}>
                { if editing { "Update Car" } else { "Add Car" } }
            </button>
            {
                if editing {
                    html! {
                        <button class="cancel" onclick={send.reform(|_: MouseEvent| Msg::CancelEdit)}>
                            {"Cancel"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// One controlled `<input>` bound to `field`.
fn field_input(
    send: &Callback<Msg>,
    field: Field,
    value: &str,
    placeholder: &'static str,
    input_type: &'static str,
) -> Html {
    let oninput = send.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });

    html! {
        <input
            type={input_type}
            placeholder={placeholder}
            value={value.to_string()}
            {oninput}
        />
    }
}

fn build_car_list(cars: &[Car], send: &Callback<Msg>) -> Html {
    html! {
        <div>
            <h2>{"Available Cars"}</h2>
            {
                if cars.is_empty() {
                    html! { <p>{"No cars available."}</p> }
                } else {
                    html! {
                        <ul>
                            { for cars.iter().enumerate().map(|(index, car)| build_car_item(index, car, send)) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn build_car_item(index: usize, car: &Car, send: &Callback<Msg>) -> Html {
    let key = car
        .id
        .map_or_else(|| format!("unsaved-{index}"), |id| id.to_string());
    let on_edit = {
        let car = car.clone();
        send.reform(move |_: MouseEvent| Msg::Edit(car.clone()))
    };

    html! {
        <li {key} class="car-item">
            <div>
                <p>{ car.title() }</p>
                <p>{ format!("Year: {}", car.year) }</p>
            </div>
            <div>
                <button class="edit" onclick={on_edit}>{"Edit"}</button>
                {
                    match car.id {
                        Some(id) => html! {
                            <button class="delete" onclick={send.reform(move |_: MouseEvent| Msg::Delete(id))}>
                                {"Delete"}
                            </button>
                        },
                        None => html! {},
                    }
                }
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::manager::Effect;
    use yew::ServerRenderer;

    #[derive(Properties, PartialEq)]
    struct SnapshotProps {
        manager: CarManager,
    }

    #[function_component]
    fn Snapshot(props: &SnapshotProps) -> Html {
        view(&props.manager, &Callback::noop())
    }

    async fn render(manager: CarManager) -> String {
        ServerRenderer::<Snapshot>::with_props(move || SnapshotProps { manager })
            .hydratable(false)
            .render()
            .await
    }

    fn loaded(cars: Vec<Car>) -> CarManager {
        let mut manager = CarManager::new();
        let Effect::Fetch { seq } = manager.fetch() else {
            unreachable!()
        };
        manager.apply_fetch(seq, cars);
        manager
    }

    fn honda() -> Car {
        Car {
            id: Some(1),
            make: "Honda".into(),
            model: "Civic".into(),
            year: "2019".into(),
        }
    }

    #[tokio::test]
    async fn empty_list_shows_placeholder() {
        let html = render(loaded(Vec::new())).await;
        assert!(html.contains("No cars available."));
        assert!(!html.contains("car-item"));
    }

    #[tokio::test]
    async fn list_items_show_title_and_year() {
        let html = render(loaded(vec![honda()])).await;
        assert!(html.contains("Honda Civic"));
        assert!(html.contains("Year: 2019"));
        assert!(html.contains("Delete"));
        assert!(!html.contains("No cars available."));
    }

    #[tokio::test]
    async fn delete_then_empty_fetch_shows_placeholder() {
        let mut manager = loaded(vec![honda()]);
        let Effect::Fetch { seq } =
            manager.mutation_succeeded(common::manager::Mutation::Deleted { id: 1 })
        else {
            unreachable!()
        };
        manager.apply_fetch(seq, Vec::new());

        assert!(render(manager).await.contains("No cars available."));
    }

    #[tokio::test]
    async fn card_title_follows_editing_marker() {
        let mut manager = loaded(vec![honda()]);
        let create_mode = render(manager.clone()).await;
        assert!(create_mode.contains("Add New Car"));
        assert!(create_mode.contains("Add Car"));
        assert!(!create_mode.contains("Cancel"));

        manager.edit(&honda()).unwrap();
        let edit_mode = render(manager).await;
        assert!(edit_mode.contains("Update Car"));
        assert!(!edit_mode.contains("Add New Car"));
        assert!(edit_mode.contains("Cancel"));
    }

    #[tokio::test]
    async fn unsaved_record_has_no_delete_button() {
        let unsaved = Car { id: None, ..honda() };
        let html = render(loaded(vec![unsaved])).await;
        assert!(html.contains("Edit"));
        assert!(!html.contains("Delete"));
    }
}
