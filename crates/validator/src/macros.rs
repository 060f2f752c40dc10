//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: struct, `Validate` impl and factory fn
//! - [`compose!`]: AND-chain multiple validators
//!
//! # Examples
//!
//! ```
//! use formkit_validator::validator;
//! use formkit_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NoSpaces for str;
//!     rule(input) { !input.contains(' ') }
//!     error(input) { ValidationError::new("no_spaces", "must not contain spaces") }
//!     fn no_spaces();
//! }
//!
//! assert!(no_spaces().validate("abc").is_ok());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub TaxId for str;
///     rule(input) { input.len() == 10 && input.bytes().all(|b| b.is_ascii_digit()) }
///     error(input) { ValidationError::new("tax_id", "Tax ID must be exactly 10 digits") }
///     fn tax_id();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Fallible constructor** (`new` and the factory return `Result`):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("regex", "Invalid format") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_regex(pattern: &str) -> regex::Error;
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Between { lo: f64, hi: f64 } for f64;
///     rule(self, input) { *input >= self.lo && *input <= self.hi }
///     error(self, input) { ValidationError::new("between", "Value is out of range") }
///     new(lo: f64, hi: f64) { Self { lo: lo.min(hi), hi: hi.max(lo) } }
///     fn between(lo: f64, hi: f64);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3c: Struct with fields + fallible new + fallible factory ─
    //
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```
/// use formkit_validator::compose;
/// use formkit_validator::prelude::*;
///
/// let validator = compose![min_length(5), max_length(20)];
/// assert!(validator.validate("hello").is_ok());
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, ValidationError};

    validator! {
        /// A test unit validator.
        TestNotEmpty for str;
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::new("not_empty", "must not be empty") }
        fn test_not_empty();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestNotEmpty.validate("x").is_ok());
        assert!(test_not_empty().validate("").is_err());
    }

    validator! {
        #[derive(Copy, PartialEq, Eq)]
        TestMaxChars { max: usize } for str;
        rule(self, input) { input.chars().count() <= self.max }
        error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
        fn test_max_chars(max: usize);
    }

    #[test]
    fn test_struct_factory() {
        let v = test_max_chars(3);
        assert_eq!(v, TestMaxChars::new(3));
        assert!(v.validate("çağ").is_ok());
        assert!(v.validate("çağrı").is_err());
    }

    validator! {
        TestBetween { lo: f64, hi: f64 } for f64;
        rule(self, input) { *input >= self.lo && *input <= self.hi }
        error(self, input) { ValidationError::new("between", "out of range") }
        new(lo: f64, hi: f64) { Self { lo: lo.min(hi), hi: hi.max(lo) } }
        fn test_between(lo: f64, hi: f64);
    }

    #[test]
    fn test_custom_new() {
        let v = test_between(10.0, 1.0);
        assert!(v.validate(&5.0).is_ok());
        assert!(v.validate(&11.0).is_err());
    }

    #[test]
    fn test_compose() {
        let v = compose![test_not_empty(), test_max_chars(2)];
        assert!(v.validate("ab").is_ok());
        assert_eq!(v.validate("").unwrap_err().code, "not_empty");
        assert_eq!(v.validate("abc").unwrap_err().code, "max_length");
    }
}
