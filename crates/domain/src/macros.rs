//! Macro for declaring an endpoint table on an operation enum
//!
//! Each resource lists its operations once, pairing every variant with the
//! logical operation name and the relative path the panel serves it on. The
//! macro generates the [`Endpoint`](crate::endpoints::Endpoint) impl plus
//! `Display`/`FromStr` keyed on the logical name.
//!
//! # Example
//!
//! ```rust
//! use btpanel_domain::endpoints::Endpoint;
//! use btpanel_domain::impl_endpoint_table;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum BackupOp {
//!     List,
//!     Create,
//! }
//!
//! impl_endpoint_table!(BackupOp, "backup", {
//!     List => ("List", "/data?action=getData&table=backup"),
//!     Create => ("ToBackup", "/database?action=ToBackup"),
//! });
//!
//! assert_eq!(BackupOp::Create.path(), "/database?action=ToBackup");
//! assert_eq!(BackupOp::from_name("List"), Some(BackupOp::List));
//! ```

/// Implements `Endpoint`, `Display` and `FromStr` for an operation enum
///
/// # Arguments
///
/// * `$enum_name` - The operation enum
/// * `$resource` - Resource label used in logs
/// * `$variant => ($name, $path)` - Logical name and relative path per
///   variant
///
/// Logical names are matched case-sensitively; they are the panel's own
/// action identifiers.
#[macro_export]
macro_rules! impl_endpoint_table {
    ($enum_name:ident, $resource:expr, { $($variant:ident => ($name:expr, $path:expr)),+ $(,)? }) => {
        impl $crate::endpoints::Endpoint for $enum_name {
            const RESOURCE: &'static str = $resource;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            fn path(self) -> &'static str {
                match self {
                    $(Self::$variant => $path,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::endpoints::Endpoint::name(*self))
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::endpoints::Endpoint>::from_name(s)
                    .ok_or_else(|| format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::endpoints::Endpoint;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestOp {
        List,
        Add,
    }

    impl_endpoint_table!(TestOp, "test", {
        List => ("List", "/data?action=getData&table=test"),
        Add => ("Add", "/test?action=Add"),
    });

    #[test]
    fn test_display_uses_logical_name() {
        assert_eq!(TestOp::List.to_string(), "List");
        assert_eq!(TestOp::Add.to_string(), "Add");
    }

    #[test]
    fn test_fromstr_roundtrip() {
        for op in TestOp::ALL {
            assert_eq!(TestOp::from_str(&op.to_string()).unwrap(), *op);
        }
    }

    #[test]
    fn test_fromstr_is_case_sensitive() {
        let result = TestOp::from_str("list");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestOp: list"));
    }

    #[test]
    fn test_path_lookup() {
        assert_eq!(TestOp::Add.path(), "/test?action=Add");
        assert_eq!(TestOp::RESOURCE, "test");
    }
}
