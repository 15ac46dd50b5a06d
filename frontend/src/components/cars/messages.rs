use common::manager::Mutation;
use common::model::car::Car;
use common::model::form::Field;

pub enum Msg {
    Fetch,
    CarsLoaded { seq: u64, cars: Vec<Car> },
    SetField(Field, String),
    Submit,
    Edit(Car),
    CancelEdit,
    Delete(u64),
    Succeeded(Mutation),
    RequestFailed(String),
}
