//! HR staff accounts: registration and password login.

mod password;
pub mod router;
pub mod service;
pub mod store;

pub use password::{hash_password, verify_password};
pub use router::account_router;
pub use service::{AccountError, AccountService, Credentials};
pub use store::{HrUser, InMemoryUserStore, UserStore};
