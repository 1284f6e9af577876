//! Flag icons for the locale options.

use crate::options::RegionTag;
use crate::view::{image, ViewNode};

/// An embedded flag image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagAsset {
    pub region: RegionTag,
    /// Asset path relative to the resource root.
    pub path: &'static str,
    pub svg: &'static str,
}

const CN: FlagAsset = FlagAsset {
    region: RegionTag::Cn,
    path: "flags/cn.svg",
    svg: include_str!("../../../resource/flags/cn.svg"),
};

const GB: FlagAsset = FlagAsset {
    region: RegionTag::Gb,
    path: "flags/gb.svg",
    svg: include_str!("../../../resource/flags/gb.svg"),
};

const KR: FlagAsset = FlagAsset {
    region: RegionTag::Kr,
    path: "flags/kr.svg",
    svg: include_str!("../../../resource/flags/kr.svg"),
};

/// Look up the flag asset for a lowercase country code.
pub fn find_flag_asset(country: &str) -> Option<FlagAsset> {
    RegionTag::from_code(country).map(|region| match region {
        RegionTag::Kr => KR,
        RegionTag::Gb => GB,
        RegionTag::Cn => CN,
    })
}

/// Select the flag asset for a lowercase country code.
///
/// # Panics
///
/// Panics on any code other than `cn`, `gb` or `kr`. The option set is
/// closed, so reaching this with anything else is a bug.
pub fn flag_asset(country: &str) -> FlagAsset {
    match find_flag_asset(country) {
        Some(asset) => asset,
        None => panic!("unsupported country: {country}"),
    }
}

/// Flag image element for a lowercase country code. Panics like [`flag_asset`].
pub fn flag(country: &str) -> ViewNode {
    image(flag_asset(country).path)
}
