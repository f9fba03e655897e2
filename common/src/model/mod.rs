pub mod app;
pub mod rating;
pub mod review;
