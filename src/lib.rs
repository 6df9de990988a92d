//! Parsing, validation, classification, formatting and matching of
//! international phone numbers, driven by per-region numbering plan
//! metadata.
//!
//! ```no_run
//! use rphonenumber::{PhoneNumberFormat, PHONE_NUMBER_UTIL};
//!
//! let number = PHONE_NUMBER_UTIL.parse("020 7031 3000", "GB").unwrap();
//! assert!(PHONE_NUMBER_UTIL.is_valid_number(&number));
//! let formatted = PHONE_NUMBER_UTIL.format(&number, PhoneNumberFormat::International).unwrap();
//! assert_eq!("+44 20 7031 3000", formatted);
//! ```

mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod generated;
mod phonenumber;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Small macros for recurring `Cow` handling.
mod macros;

#[cfg(test)]
mod tests;

pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumberutil::{
    enums, errors,
    phonenumberutil::PhoneNumberUtil,
    MatchType, PhoneNumberFormat, PhoneNumberType, PHONE_NUMBER_UTIL,
};
pub use proto_gen::phonemetadata::{NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};
pub use regexp_cache::InvalidRegexError;
