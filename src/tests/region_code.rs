/// Region codes present in the test metadata.
pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ad() -> &'static str {
        "AD"
    }

    pub fn ao() -> &'static str {
        "AO"
    }

    pub fn ar() -> &'static str {
        "AR"
    }

    pub fn au() -> &'static str {
        "AU"
    }

    pub fn bs() -> &'static str {
        "BS"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn kr() -> &'static str {
        "KR"
    }

    pub fn mx() -> &'static str {
        "MX"
    }

    pub fn nz() -> &'static str {
        "NZ"
    }

    pub fn pl() -> &'static str {
        "PL"
    }

    pub fn re() -> &'static str {
        "RE"
    }

    pub fn sg() -> &'static str {
        "SG"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn yt() -> &'static str {
        "YT"
    }

    pub fn un001() -> &'static str {
        "001"
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
