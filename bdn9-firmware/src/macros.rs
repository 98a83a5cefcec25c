#[allow(unused)]
#[cfg(all(not(test), not(feature = "defmt"), not(feature = "test-utils")))]
mod no_defmt {
    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {{
            let _ = ($($arg),*);
        }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {{
            let _ = ($($arg),*);
        }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {{
            let _ = ($($arg),*);
        }};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {{
            let _ = ($($arg),*);
        }};
    }
}

#[cfg(all(not(test), not(feature = "test-utils"), feature = "defmt"))]
mod defmt {
    /// Log debug messages to the debug console. It will call the [defmt::debug] macro.
    ///
    /// Without the `defmt` feature nothing is printed and the arguments are only evaluated. When
    /// testing on the host `eprintln!` is called instead. In order to work with both `defmt` and
    /// `eprintln` only the `{}` and `{:?}` placeholders can be used.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[macro_use] extern crate bdn9_firmware;
    /// # fn main() {
    /// let layer = 2u8;
    /// debug!("At layer {}.", layer);
    /// # }
    /// ```
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {
            defmt::debug!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {
            defmt::info!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {
            defmt::warn!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {
            defmt::error!($($arg,)*)
        };
    }
}

#[cfg(any(test, feature = "test-utils"))]
mod host {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("DEBUG: {}", format_args!($($arg,)*))
        }};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("INFO: {}", format_args!($($arg,)*))
        }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("WARN: {}", format_args!($($arg,)*))
        }};
    }

    /// Panics in tests.
    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {{
            extern crate std;
            if cfg!(test) {
                panic!("{}", format_args!($($arg,)*));
            } else {
                std::eprintln!(
                    "ERROR: at ./{}:{}:{}: {}",
                    file!(),
                    line!(),
                    column!(),
                    format_args!($($arg,)*)
                );
            }
        }};
    }
}
