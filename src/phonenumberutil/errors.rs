// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::num::ParseIntError;

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Failure that can only be caused by broken metadata, never by user input.
#[derive(Debug, PartialEq, Error)]
pub enum InternalLogicError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}

/// Metadata text could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not parse metadata: {0}")]
pub struct InvalidMetadataError(pub String);

#[derive(Debug, PartialEq, Error)]
pub(crate) enum ParseErrorInternal {
    #[error("{0}")]
    FailedToParse(#[from] ParseError),
    #[error("{0}")]
    RegexError(#[from] InvalidRegexError)
}

/// Reasons why a string could not be turned into a [`crate::PhoneNumber`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The country calling code is missing or unknown. Also returned when
    /// the default region is unknown and the number has no leading plus.
    #[error("Invalid country code")]
    InvalidCountryCode,
    /// The input does not look like a phone number at all.
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    /// Too few digits follow the international prefix or plus sign.
    #[error("Too short after idd")]
    TooShortAfterIdd,
    /// The national significant number is shorter than two digits.
    #[error("Too short Nsn")]
    TooShortNsn,
    /// The national significant number is longer than seventeen digits.
    #[error("Too long nsn")]
    TooLongNsn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotANumberError {
    #[error("Number not matched a valid number pattern")]
    NotMatchedValidNumberPattern,
    #[error("Invalid phone context")]
    InvalidPhoneContext,
    #[error("Input is too long")]
    InputTooLong,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
    #[error("{0}")]
    FailedToExtractNumber(#[from] ExtractNumberError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractNumberError {
    #[error("No valid start character found")]
    NoValidStartCharacter,
    #[error("Invalid number")]
    NotANumber,
}

#[derive(Debug, PartialEq, Error)]
pub enum GetExampleNumberError {
    #[error("Parse error: {0}")]
    FailedToParse(#[from] ParseError),
    #[error("No example number")]
    NoExampleNumber,
    #[error("Invalid region code provided")]
    InvalidRegionCode,
    #[error("Unknown non-geographical calling code")]
    InvalidCountryCode,
}

/// Reasons why a number is not possible. A possible number is reported as
/// `Ok(())` by [`crate::PhoneNumberUtil::is_possible_number_with_reason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

impl From<ExtractNumberError> for ParseError {
    fn from(value: ExtractNumberError) -> Self {
        NotANumberError::FailedToExtractNumber(value).into()
    }
}

impl From<ExtractNumberError> for ParseErrorInternal {
    fn from(value: ExtractNumberError) -> Self {
        ParseError::from(value).into()
    }
}

impl From<NotANumberError> for ParseErrorInternal {
    fn from(value: NotANumberError) -> Self {
        ParseError::from(value).into()
    }
}

impl ParseErrorInternal {
    pub fn into_public(self) -> ParseError {
        match self {
            ParseErrorInternal::FailedToParse(err) => err,
            ParseErrorInternal::RegexError(err) =>
                panic!("A valid regex is expected in metadata; this indicates a library bug! {}", err)
        }
    }
}
