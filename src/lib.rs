//! IBAN validation per ISO 13616: structure, per-country length and the
//! MOD97-10 checksum.

pub mod checksum;
pub mod logging;
pub mod reference;
pub mod validator;

pub use validator::{check_iban, normalize, validate_iban, Iban, Rejection};
