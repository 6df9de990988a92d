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

use std::borrow::Cow;

use crate::phonenumberutil::helper_constants::{REGION_CODE_FOR_NON_GEO_ENTITY, UNKNOWN_REGION};

pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        UNKNOWN_REGION
    }

    /// Region code of numbers that belong to non-geographical entities, such
    /// as the international freephone service (+800).
    pub fn un001() -> &'static str {
        REGION_CODE_FOR_NON_GEO_ENTITY
    }

    /// Region codes are accepted in any case, metadata keys are upper case.
    pub fn normalize(region_code: &str) -> Cow<'_, str> {
        if region_code.bytes().any(|b| b.is_ascii_lowercase()) {
            Cow::Owned(region_code.to_ascii_uppercase())
        } else {
            Cow::Borrowed(region_code)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::RegionCode;

    #[test]
    fn normalize_upper_cases() {
        assert_eq!("NZ", RegionCode::normalize("nz"));
        assert!(matches!(RegionCode::normalize("GB"), Cow::Borrowed("GB")));
        assert_eq!("001", RegionCode::normalize("001"));
    }
}
