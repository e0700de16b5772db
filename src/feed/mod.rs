pub mod controller;
pub mod index;
pub mod view;
