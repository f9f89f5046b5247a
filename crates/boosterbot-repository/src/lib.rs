//! # Boosterbot Repository
//!
//! Data access for user records:
//!
//! ```text
//! Service
//!   ↓  Arc<R: UserRepository>   (domain interface)
//! InMemoryUserRepository        (single-process store)
//! ```
//!
//! The trait is a narrow point-lookup/update interface; `false` returns
//! mean "user not found" or "constraint violated", never a storage
//! fault.

pub mod memory;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use traits::*;
