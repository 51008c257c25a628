pub mod audit;
pub mod history;
pub mod notification;
pub mod response;
pub mod user;
pub mod visitor;
pub mod worker;
