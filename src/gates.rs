//! Run/skip gates for test bodies.
//!
//! Thin boolean decision points: the caller supplies the condition, the gate
//! early-returns from the enclosing test with a note on stderr. Useful for
//! tests that only make sense with credentials, network access, or other
//! environment-dependent preconditions.

/// Returns early from the enclosing test when `cond` is true.
#[macro_export]
macro_rules! skip_if {
    ($cond:expr) => {
        if $cond {
            eprintln!("skipping {}: {}", $crate::fn_name!(), stringify!($cond));
            return;
        }
    };
}

/// Returns early from the enclosing test unless `cond` is true.
#[macro_export]
macro_rules! run_if {
    ($cond:expr) => {
        if !$cond {
            eprintln!(
                "skipping {}: requires {}",
                $crate::fn_name!(),
                stringify!($cond)
            );
            return;
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn skip_if_returns_early_when_condition_holds() {
        skip_if!(true);
        unreachable!("gate should have returned");
    }

    #[test]
    fn skip_if_falls_through_when_condition_fails() {
        skip_if!(false);
    }

    #[test]
    fn run_if_returns_early_when_condition_fails() {
        run_if!(false);
        unreachable!("gate should have returned");
    }

    #[test]
    fn run_if_falls_through_when_condition_holds() {
        run_if!(true);
    }
}
