use std::cell::RefCell;

use assert_helpers_core::{
    errback, AssertError, Asserter, Context, Environment, Errback, MemorySink,
};

/// An asserter on a piped, colorless environment that reports into memory
#[allow(dead_code)]
pub fn quiet_asserter() -> (Asserter, MemorySink) {
    asserter_for(Environment::piped())
}

/// An asserter on `env` that reports into memory
#[allow(dead_code)]
pub fn asserter_for(env: Environment) -> (Asserter, MemorySink) {
    let sink = MemorySink::new();
    let ctx = Context::fixed(env).with_sink(sink.clone());
    (Asserter::new(ctx), sink)
}

/// Records every invocation of the errbacks it hands out
#[allow(dead_code)]
#[derive(Default)]
pub struct Calls(RefCell<Vec<Option<AssertError>>>);

#[allow(dead_code)]
impl Calls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errback(&self) -> Option<Errback<'_>> {
        Some(errback(move |err| self.0.borrow_mut().push(err)))
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether exactly one call was made, with a failure
    pub fn failed_once(&self) -> bool {
        matches!(self.0.borrow().as_slice(), [Some(_)])
    }

    /// Whether exactly one call was made, without a failure
    pub fn passed_once(&self) -> bool {
        matches!(self.0.borrow().as_slice(), [None])
    }

    pub fn take(&self) -> Vec<Option<AssertError>> {
        self.0.borrow_mut().drain(..).collect()
    }
}
