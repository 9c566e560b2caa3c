pub mod options;
pub mod validator;
pub mod value;
