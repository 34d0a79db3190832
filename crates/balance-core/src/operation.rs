//! Operation names and invocations

use std::fmt;

/// Operations the contract knows how to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Deployment hook, no-op
    Init,
    /// Upgrade hook, no-op
    Upgrade,
    /// Open an account at balance 0
    Create,
    /// Add a signed amount to a balance
    Charge,
    /// Read a balance
    Query,
}

impl Operation {
    /// Every operation, in registration order
    pub const ALL: [Operation; 5] = [
        Operation::Init,
        Operation::Upgrade,
        Operation::Create,
        Operation::Charge,
        Operation::Query,
    ];

    /// Wire name of the operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Upgrade => "upgrade",
            Operation::Create => "create",
            Operation::Charge => "charge",
            Operation::Query => "query",
        }
    }

    /// Resolve a wire name (exact, case-sensitive match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One request to run a named operation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Operation name as received
    pub function: String,
    /// Positional arguments
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

}
