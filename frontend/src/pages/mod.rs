pub mod admin;
pub mod home;
pub mod leaves;
pub mod login;
pub mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
