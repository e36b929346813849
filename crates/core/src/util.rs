use crate::hex::Hex;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took at the given level (default `Debug`),
/// and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Render a sequence of hexes as `[(q,r) (q,r) ...]`. This is the format used
/// anywhere we print a bunch of hexes, so keep it stable.
pub fn hex_list(hexes: impl IntoIterator<Item = Hex>) -> String {
    let hexes: Vec<String> =
        hexes.into_iter().map(|hex| hex.to_string()).collect();
    format!("[{}]", hexes.join(" "))
}
