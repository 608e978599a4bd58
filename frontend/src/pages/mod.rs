pub mod admin;
pub mod home;
pub mod submit_request;
pub mod withdrawal;

pub use admin::AdminPage;
pub use home::HomePage;
pub use submit_request::SubmitRequestPage;
pub use withdrawal::WithdrawalPage;
