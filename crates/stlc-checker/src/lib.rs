//! The type checker. Given a term and a typing context it either produces
//! the unique type the rules assign or the first rule violation it runs
//! into, as in
//!
//! ```md
//!  Γ ⊢ t1 : Bool   Γ ⊢ t2 : T2   Γ ⊢ t3 : T3
//! ────────────────────────────────────────────
//!     Γ ⊢ if t1 then t2 else t3 : T2 ∨ T3
//! ```
//!
//! where `∨` is the join of the structural subtype lattice defined in
//! [sub].

pub mod context;
pub mod error;
pub mod infer;
pub mod sub;

pub use context::Ctx;
pub use error::TypeError;
pub use infer::{type_of, Infer};
pub use sub::{join, meet, subtype_of};
