//! Typed sentinels for the environment variables the edge runtime exports into a function process.
// Re-export paste so users don't need to depend on it directly
pub use paste;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "testing"))]
mod testing_harness {
    use super::VarNameErr;
    use std::cell::Cell;

    type MockValue = Cell<Option<Box<dyn Fn(&'static str) -> Result<String, std::env::VarError>>>>;
    thread_local! {
        static MOCK_VAR_GETTER: MockValue = const { Cell::new(None) };
    }

    pub fn read_env(s: &'static str) -> Result<String, VarNameErr> {
        let cur_getter = MOCK_VAR_GETTER.replace(None);
        match cur_getter {
            Some(mock) => {
                let out = mock(s);
                MOCK_VAR_GETTER.replace(Some(mock));
                out
            }
            None => std::env::var(s),
        }
        .map_err(|err| VarNameErr { var_name: s, err })
    }

    /// Run `cb` with every env lookup on this thread answered by `f`.
    pub fn with_mock_env<F, Cb, U>(f: F, cb: Cb) -> U
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError> + 'static,
        Cb: FnOnce() -> U,
    {
        MOCK_VAR_GETTER.replace(Some(Box::new(f)));
        let output = cb();
        MOCK_VAR_GETTER.replace(None);
        output
    }
}

#[cfg(any(test, feature = "testing"))]
pub use testing_harness::{read_env, with_mock_env};

#[cfg(not(any(test, feature = "testing")))]
pub fn read_env(s: &'static str) -> Result<String, VarNameErr> {
    std::env::var(s).map_err(|err| VarNameErr { var_name: s, err })
}

/// The type of error that is produced by this crate
#[derive(Debug, Error)]
#[error("An error occurred while reading envvar: {var_name}. Err: {err}")]
pub struct VarNameErr {
    var_name: &'static str,
    err: std::env::VarError,
}

impl VarNameErr {
    /// The name of the variable that could not be read
    pub fn var_name(&self) -> &'static str {
        self.var_name
    }

    /// True when the variable is simply not set, as opposed to holding invalid unicode
    pub fn is_not_present(&self) -> bool {
        matches!(self.err, std::env::VarError::NotPresent)
    }
}

#[macro_export]
macro_rules! env_var {
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident;
    ) => {
        $crate::paste::paste! {
            #[doc = "struct which represents the existence of the `" $n:snake:upper "` environment variable."]
            $(#[$attr])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            $v struct $n(std::sync::Arc<str>);

            impl $n {
                /// The name of the variable as it appears in the process environment
                #[allow(dead_code)]
                $v const NAME: &'static str = stringify!([<$n:snake:upper>]);

                #[doc = "Attempt to create a new instance of [Self] by reading `" $n:snake:upper "` from the environment variables."]
                #[allow(dead_code)]
                #[tracing::instrument(err, level = tracing::Level::TRACE)]
                $v fn new() -> Result<Self, $crate::VarNameErr> {
                    let res = $crate::read_env(Self::NAME)?;
                    Ok(Self(std::sync::Arc::from(res)))
                }

                #[doc = "Like [Self::new] but maps an unset variable to `None`"]
                #[allow(dead_code)]
                $v fn optional() -> Result<Option<Self>, $crate::VarNameErr> {
                    match Self::new() {
                        Ok(v) => Ok(Some(v)),
                        Err(e) if e.is_not_present() => Ok(None),
                        Err(e) => Err(e),
                    }
                }

                #[doc = "Take the value out as an owned string"]
                #[allow(dead_code)]
                $v fn into_string(self) -> String {
                    self.0.to_string()
                }
            }

            impl std::ops::Deref for $n {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl std::convert::AsRef<str> for $n {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        }
    };
}
