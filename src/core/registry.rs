use crate::core::functions;
use crate::core::session::Session;
use crate::utils::error::{FixtureError, Result};
use std::collections::HashMap;
use std::io::Write;

/// A callable function value. Receives the registry so it can dispatch
/// further calls by name.
pub type Builtin<W> =
    fn(&FunctionRegistry<W>, &mut Session<W>, &[String]) -> Result<Option<String>>;

/// Name → function table backing call-by-name. Lookups ignore ASCII case.
pub struct FunctionRegistry<W: Write> {
    functions: HashMap<String, Builtin<W>>,
}

impl<W: Write> FunctionRegistry<W> {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registry preloaded with `print_stuff`, `still_working` and `dafna`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("print_stuff", functions::print_stuff::<W>);
        registry.register("still_working", functions::still_working::<W>);
        registry.register("dafna", functions::dafna::<W>);
        registry
    }

    /// Returns the function previously registered under the same name, if any.
    pub fn register(&mut self, name: &str, function: Builtin<W>) -> Option<Builtin<W>> {
        self.functions.insert(name.to_ascii_lowercase(), function)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_ascii_lowercase())
    }

    pub fn call(
        &self,
        session: &mut Session<W>,
        name: &str,
        args: &[String],
    ) -> Result<Option<String>> {
        let function = self
            .functions
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| FixtureError::UnknownFunction {
                name: name.to_string(),
            })?;
        tracing::trace!("dispatching {}({} args)", name, args.len());
        function(self, session, args)
    }
}

impl<W: Write> Default for FunctionRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}
