use crate::domain::model::NamedHolder;
use crate::utils::error::{FixtureError, Result};

/// Method dispatch by name, the counterpart of a `[object, "method"]` callback.
///
/// Method names resolve case-insensitively. A method with no return value
/// yields `None`.
pub trait Invocable {
    fn class_name(&self) -> &'static str;

    fn invoke_method(&mut self, method: &str, args: &[String]) -> Result<Option<String>>;
}

pub(crate) fn expect_args(callable: &str, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(FixtureError::ArityMismatch {
            callable: callable.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl Invocable for NamedHolder {
    fn class_name(&self) -> &'static str {
        "NamedHolder"
    }

    fn invoke_method(&mut self, method: &str, args: &[String]) -> Result<Option<String>> {
        match method.to_ascii_lowercase().as_str() {
            "getmyname" => {
                expect_args(method, args, 0)?;
                Ok(Some(self.name().to_string()))
            }
            "setmyname" => {
                expect_args(method, args, 1)?;
                self.set_name(args[0].clone());
                Ok(None)
            }
            _ => Err(FixtureError::UnknownMethod {
                class: self.class_name().to_string(),
                method: method.to_string(),
            }),
        }
    }
}

/// A bound method reference: receiver plus method name.
pub struct MethodRef<'a, T: Invocable> {
    receiver: &'a mut T,
    method: String,
}

impl<'a, T: Invocable> MethodRef<'a, T> {
    pub fn new(receiver: &'a mut T, method: impl Into<String>) -> Self {
        Self {
            receiver,
            method: method.into(),
        }
    }

    pub fn call(&mut self, args: &[String]) -> Result<Option<String>> {
        tracing::trace!("dispatching {}::{}", self.receiver.class_name(), self.method);
        self.receiver.invoke_method(&self.method, args)
    }
}
