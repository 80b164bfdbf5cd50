/// Logs a completed step on the `solid::success` target.
///
/// The command line renders these with a dedicated symbol, everything else
/// treats them as regular `INFO` events.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: "solid::success", $($arg)+)
    };
}
