pub mod controller;
pub mod highlight;
pub mod session_model;
