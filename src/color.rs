use std::env::var_os;

use supports_color::Stream;

/// Determine if diagnostic output should be colored.
///
/// Respects [`NO_COLOR`](https://no-color.org) on top of the terminal
/// detection done by `supports-color`.
pub(crate) fn should_use_color() -> bool {
    var_os("NO_COLOR").is_none() && supports_color::on(Stream::Stdout).is_some()
}
