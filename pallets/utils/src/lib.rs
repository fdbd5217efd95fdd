#![cfg_attr(not(feature = "std"), no_std)]

//! Pieces shared by the lending pallets: id types, the check-then-set extrinsic procedures,
//! and the operation traits through which the loan core talks to its collaborators.

pub use functions::{extrinsic_procedure, fallible_extrinsic_procedure};
pub use traits::{FungibleOperations, LoanConfiguration, NonFungibleOperations};
pub use types::*;

mod functions;
pub mod traits;
mod types;
