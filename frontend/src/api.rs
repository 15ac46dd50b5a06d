//! HTTP calls against the `/cars` collection.
//!
//! All four verbs share the same failure handling: a transport error and a
//! non-2xx status both come back as [`RequestError`]. Response bodies of
//! mutations are not read.

use common::model::car::Car;
use gloo_net::http::{Request, Response};
use thiserror::Error;
use yew::AttrValue;

#[derive(Error, Debug)]
pub enum RequestError {
    /// Network failure, or a body that could not be encoded or decoded.
    #[error("{0}")]
    Transport(#[from] gloo_net::Error),

    #[error("server answered {status} {status_text}")]
    Status { status: u16, status_text: String },
}

/// Client for one collection endpoint, e.g. `https://host/cars`.
#[derive(Clone, Debug, PartialEq)]
pub struct CarsApi {
    base: AttrValue,
}

impl CarsApi {
    pub fn new(base: AttrValue) -> Self {
        Self { base }
    }

    fn collection_url(&self) -> &str {
        self.base.trim_end_matches('/')
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// `GET /cars`, in the order the server returns them.
    pub async fn list(&self) -> Result<Vec<Car>, RequestError> {
        let response = Request::get(self.collection_url()).send().await?;
        Ok(ensure_ok(response)?.json::<Vec<Car>>().await?)
    }

    /// `POST /cars`
    pub async fn create(&self, car: &Car) -> Result<(), RequestError> {
        let response = Request::post(self.collection_url())
            .json(car)?
            .send()
            .await?;
        ensure_ok(response).map(drop)
    }

    /// `PUT /cars/{id}`
    pub async fn update(&self, id: u64, car: &Car) -> Result<(), RequestError> {
        let response = Request::put(&self.item_url(id)).json(car)?.send().await?;
        ensure_ok(response).map(drop)
    }

    /// `DELETE /cars/{id}`
    pub async fn delete(&self, id: u64) -> Result<(), RequestError> {
        let response = Request::delete(&self.item_url(id)).send().await?;
        ensure_ok(response).map(drop)
    }
}

fn ensure_ok(response: Response) -> Result<Response, RequestError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(RequestError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_url_appends_id_once() {
        let api = CarsApi::new(AttrValue::from("https://example.test/cars/"));
        assert_eq!(api.collection_url(), "https://example.test/cars");
        assert_eq!(api.item_url(7), "https://example.test/cars/7");
    }
}
