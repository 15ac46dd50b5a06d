use serde::{Deserialize, Deserializer, Serialize};

/// A single record of the remote `/cars` collection.
///
/// The same shape is used for list entries returned by `GET /cars` and for the
/// bodies sent with `POST` and `PUT`. `id` is assigned by the collection and is
/// left out of the JSON body when absent, so a freshly composed car serializes
/// as `{"make":..,"model":..,"year":..}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Car {
    /// Identifier assigned by the remote collection; `None` until created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub make: String,
    pub model: String,
    /// Kept as text. The collection may hand it back as a number, which is
    /// accepted and rendered to its decimal form.
    #[serde(deserialize_with = "year_from_text_or_number")]
    pub year: String,
}

impl Car {
    /// Headline shown in the list: `"{make} {model}"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn year_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match YearRepr::deserialize(deserializer)? {
        YearRepr::Text(text) => text,
        YearRepr::Integer(n) => n.to_string(),
        YearRepr::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_car_serializes_without_id() {
        let car = Car {
            id: None,
            make: "Toyota".into(),
            model: "Vios".into(),
            year: "2020".into(),
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"make": "Toyota", "model": "Vios", "year": "2020"})
        );
    }

    #[test]
    fn existing_car_keeps_its_id_in_the_body() {
        let car = Car {
            id: Some(7),
            make: "Toyota".into(),
            model: "Vios".into(),
            year: "2020".into(),
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn list_decodes_in_server_order() {
        let body = r#"[
            {"id": 3, "make": "Honda", "model": "Civic", "year": "2019"},
            {"id": 1, "make": "Ford", "model": "Focus", "year": "2015"}
        ]"#;
        let cars: Vec<Car> = serde_json::from_str(body).unwrap();
        let ids: Vec<_> = cars.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1)]);
        assert_eq!(cars[0].title(), "Honda Civic");
    }

    #[test]
    fn numeric_year_is_accepted() {
        let car: Car =
            serde_json::from_str(r#"{"id": 2, "make": "Kia", "model": "Rio", "year": 2021}"#)
                .unwrap();
        assert_eq!(car.year, "2021");
    }

    #[test]
    fn missing_id_decodes_as_none() {
        let car: Car =
            serde_json::from_str(r#"{"make": "Kia", "model": "Rio", "year": "2021"}"#).unwrap();
        assert_eq!(car.id, None);
    }

    #[test]
    fn ids_beyond_u32_decode() {
        let body = r#"[
            {"id": 1, "make": "Honda", "model": "Civic", "year": "2019"},
            {"id": 5000000000, "make": "Kia", "model": "Rio", "year": "2021"}
        ]"#;
        let cars: Vec<Car> = serde_json::from_str(body).unwrap();
        assert_eq!(cars[1].id, Some(5_000_000_000));
    }
}
