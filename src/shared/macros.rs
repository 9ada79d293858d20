/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a setup result, or logs which stage failed and exits with status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $stage:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("lift-sim: {} failed: {}", $stage, e);
                std::process::exit(1);
            }
        }
    };
}
