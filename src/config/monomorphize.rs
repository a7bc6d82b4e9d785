/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(non_snake_case)]

use std::io::Read;

use crate::ConfigError;

/// Reads YAML documents, warning about keys that were not recognized.
///
/// The deserialization code is generated in the crate that invokes
/// [`derive_yaml_read!`], so downstream crates don't pay for it.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, ConfigError>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, ConfigError> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        YamlRead::from_yaml_str(&s)
    }

    fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let value = value_from_str(s)?;

        match Self::__serde_ignored__from_value(value) {
            Ok(out) => Ok(out),
            // Errors from a Value have lost their line numbers.
            // Parse the string again for a better message.
            Err(e) => match Self::__serde_yaml__from_str(s) {
                Err(better) => Err(better),
                Ok(_) => Err(e),
            },
        }
    }

    #[doc(hidden)]
    fn __serde_ignored__from_value(value: serde_yaml::Value) -> Result<Self, ConfigError>;
    #[doc(hidden)]
    fn __serde_yaml__from_str(s: &str) -> Result<Self, ConfigError>;
}

#[macro_export]
macro_rules! derive_yaml_read {
    ($Type:ty) => {
        const _: () = {
            use std::result::Result;
            use std::convert::Into;
            use $crate::reexports::serde_yaml;
            use $crate::reexports::serde_ignored;
            use $crate::reexports::log::warn;
            use $crate::ConfigError;

            impl $crate::YamlRead for $Type {
                fn __serde_ignored__from_value(value: serde_yaml::Value) -> Result<$Type, ConfigError> {
                    serde_ignored::deserialize(
                        value,
                        |path| warn!("Unused config item (possible typo?): {}", path),
                    ).map_err(Into::into)
                }

                fn __serde_yaml__from_str(s: &str) -> Result<$Type, ConfigError> {
                    serde_yaml::from_str(s)
                        .map_err(Into::into)
                }
            }
        };
    };
}

derive_yaml_read!{serde_yaml::Value}

fn value_from_str(s: &str) -> Result<serde_yaml::Value, ConfigError>
{ serde_yaml::from_str(s).map_err(Into::into) }
