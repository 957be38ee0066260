use crate::config::ScriptConfig;
use crate::core::registry::FunctionRegistry;
use crate::core::session::Session;
use crate::domain::model::NamedHolder;
use crate::domain::ports::MethodRef;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: usize,
    pub greeter_calls: u64,
    /// Last value returned by the greeter, `None` when the loop never ran.
    pub last_counter: Option<String>,
    pub holder_name: String,
}

/// Runs the driving loop and the holder trailer against an output sink.
pub struct Driver {
    config: ScriptConfig,
}

impl Driver {
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    pub fn run<W: Write>(&self, out: W) -> Result<RunSummary> {
        self.run_with(&FunctionRegistry::with_builtins(), out)
    }

    /// Same as [`Driver::run`] but dispatches through the given registry.
    pub fn run_with<W: Write>(
        &self,
        registry: &FunctionRegistry<W>,
        out: W,
    ) -> Result<RunSummary> {
        tracing::info!("Starting run with {} iterations", self.config.iterations);

        let mut session = Session::new(out);
        let message = [self.config.message.clone()];
        let mut last_counter = None;

        for i in 0..self.config.iterations {
            session.print(&format!("{}\n", i))?;
            let counter = registry.call(&mut session, "dafna", &[])?;
            tracing::debug!("iteration {}: dafna() returned {:?}", i, counter);
            last_counter = counter;
            registry.call(&mut session, "print_stuff", &message)?;
            session.print(&format!("{}\n", i))?;
        }

        let mut holder = NamedHolder::new();
        if let Some(name) = &self.config.rename {
            MethodRef::new(&mut holder, "SetMyName").call(std::slice::from_ref(name))?;
        }
        let holder_name = MethodRef::new(&mut holder, "GetMyName")
            .call(&[])?
            .unwrap_or_default();
        session.print(&holder_name)?;
        session.print("\n")?;
        session.flush()?;

        let summary = RunSummary {
            iterations: self.config.iterations,
            greeter_calls: session.counter().value(),
            last_counter,
            holder_name,
        };
        tracing::info!(
            "Run finished: {} greeter calls, holder name {:?}",
            summary.greeter_calls,
            summary.holder_name
        );
        Ok(summary)
    }
}
