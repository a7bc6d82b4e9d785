/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small macros shared by tests and settings code.

#[doc(hidden)]
pub mod reexports {
    pub use serde_json;
}

/// Does `serde_json::from_value(json!($($arg)*)).unwrap()`
///
/// Why? Because if you're writing a json literal, then you're probably
/// already quite certain that it is valid!
#[macro_export]
macro_rules! from_json {
    ($($arg:tt)*) => {
        $crate::try_from_json!($($arg)*).unwrap()
    };
}

/// `from_json!` without the unwrap, for literals that are meant to be rejected.
#[macro_export]
macro_rules! try_from_json {
    ($($arg:tt)*) => {
        $crate::reexports::serde_json::from_value(
            $crate::reexports::serde_json::json!($($arg)*)
        )
    };
}
