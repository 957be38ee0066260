pub const DEFAULT_HOLDER_NAME: &str = "Dafna";

/// Object carrying a single mutable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedHolder {
    name: String,
}

impl NamedHolder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_HOLDER_NAME.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Default for NamedHolder {
    fn default() -> Self {
        Self::new()
    }
}

/// Call counter for the stateful greeter. Lives as long as the session that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments and returns the new value.
    pub fn bump(&mut self) -> u64 {
        self.value += 1;
        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_defaults_to_dafna() {
        let holder = NamedHolder::new();
        assert_eq!(holder.name(), "Dafna");
        assert_eq!(holder, NamedHolder::default());
    }

    #[test]
    fn test_holder_setter_replaces_name() {
        let mut holder = NamedHolder::new();
        holder.set_name("");
        assert_eq!(holder.name(), "");
        holder.set_name("Yael".to_string());
        assert_eq!(holder.name(), "Yael");
    }

    #[test]
    fn test_counter_starts_at_zero_and_bumps_by_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.bump(), 1);
        assert_eq!(counter.bump(), 2);
        assert_eq!(counter.value(), 2);
    }
}
