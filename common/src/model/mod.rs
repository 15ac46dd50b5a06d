pub mod car;
pub mod form;
