//! The fixture's free functions, in [`Builtin`](crate::core::registry::Builtin) form.

use crate::core::registry::FunctionRegistry;
use crate::core::session::Session;
use crate::domain::ports::expect_args;
use crate::utils::error::Result;
use std::io::Write;

pub const GREETING: &str = "Dafna!\n";
pub const STILL_ALIVE: &str = "I'm still alive";

/// Writes its single argument verbatim.
pub fn print_stuff<W: Write>(
    _registry: &FunctionRegistry<W>,
    session: &mut Session<W>,
    args: &[String],
) -> Result<Option<String>> {
    expect_args("print_stuff", args, 1)?;
    session.print(&args[0])?;
    Ok(None)
}

pub fn still_working<W: Write>(
    _registry: &FunctionRegistry<W>,
    _session: &mut Session<W>,
    args: &[String],
) -> Result<Option<String>> {
    expect_args("still_working", args, 0)?;
    Ok(Some(STILL_ALIVE.to_string()))
}

/// Stateful greeter. Prints the greeting and `still_working()` on its own
/// line, then bumps the session counter and returns the new count.
pub fn dafna<W: Write>(
    registry: &FunctionRegistry<W>,
    session: &mut Session<W>,
    args: &[String],
) -> Result<Option<String>> {
    expect_args("dafna", args, 0)?;
    session.print(GREETING)?;
    let alive = registry
        .call(session, "still_working", &[])?
        .unwrap_or_default();
    session.print(&alive)?;
    session.print("\n")?;
    let count = session.counter_mut().bump();
    Ok(Some(count.to_string()))
}
