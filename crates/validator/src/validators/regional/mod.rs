//! Turkish regional format validators
//!
//! Identity numbers, tax IDs, mobile phone numbers, IBANs and vehicle
//! plates. All of them validate `str`; the IBAN and plate checks upper-case
//! their input first so lowercase entry is accepted.

pub mod iban;
pub mod national_id;
pub mod phone;
pub mod plate;
pub mod tax_id;

pub use iban::{TrIban, tr_iban};
pub use national_id::{NationalId, national_id, national_id_checksum};
pub use phone::{TrPhone, tr_phone};
pub use plate::{Plate, plate};
pub use tax_id::{TaxId, tax_id};
